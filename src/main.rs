fn main() {
    rsn_suite::app::cli::run();
}
