use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn missing_result_dir_exits_1_without_writing() {
    let ctx = TestContext::new();
    ctx.write_abrun();

    ctx.cli()
        .args(["create", "-d", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: result dir"))
        .stderr(predicate::str::contains("does not exist"));

    ctx.assert_nothing_written();
}

#[test]
fn missing_executable_exits_2_without_writing() {
    let ctx = TestContext::new();
    ctx.write_fragments("run", "case", 2);

    ctx.cli()
        .args(["create", "-d", "run", "-a", "bin/abrun.sh"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error: analysis executable"));

    ctx.assert_nothing_written();
}

#[test]
fn missing_result_dir_parameter_exits_3() {
    let ctx = TestContext::new();
    ctx.write_abrun();

    ctx.cli()
        .arg("create")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Missing parameter 'result_dir'"));
}

#[test]
fn malformed_site_config_exits_3() {
    let ctx = TestContext::with_sweep(1);
    ctx.write_site_config("[general\nmax_concurrent_jobs = 2\n");

    ctx.cli().args(["create", "-d", "run"]).assert().code(3);
    ctx.assert_nothing_written();
}

#[test]
fn zero_concurrency_exits_3() {
    let ctx = TestContext::with_sweep(1);

    ctx.cli()
        .args(["create", "-d", "run", "-m", "0"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("max_concurrent_jobs"));
}

#[test]
fn usage_errors_exit_64() {
    let ctx = TestContext::new();

    ctx.cli().args(["create", "--no-such-flag"]).assert().code(64);
    ctx.cli().args(["create", "-m", "lots"]).assert().code(64);
}

#[test]
fn help_exits_0() {
    let ctx = TestContext::new();

    ctx.cli().arg("--help").assert().success().stdout(predicate::str::contains("create"));
}

#[test]
fn no_fragments_warns_and_still_generates() {
    let ctx = TestContext::new();
    ctx.write_abrun();
    ctx.write_fragments("run", "case", 0);

    ctx.cli()
        .args(["create", "-d", "run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("could not find any"));

    assert!(ctx.read("suite.rc").contains("procid = 0..0\n"));
}

#[test]
fn output_dir_with_space_exits_3_without_writing() {
    let ctx = TestContext::with_sweep(1);
    std::fs::create_dir(ctx.work_dir().join("my out")).unwrap();

    ctx.cli()
        .args(["create", "-d", "run", "-o", "my out"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("working_dir"));

    ctx.assert_nothing_written_in("my out");
}
