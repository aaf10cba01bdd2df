use crate::harness::TestContext;

const SITE: &str = r#"
[afterburner]
app_name = "SiteMonitor"

[general]
result_dir = "run"
max_concurrent_jobs = 6
python_exec = "/usr/bin/python3"
"#;

#[test]
fn site_config_in_cwd_supplies_values() {
    let ctx = TestContext::with_sweep(2);
    ctx.write_site_config(SITE);

    ctx.cli().arg("create").assert().success();

    let suite = ctx.read("suite.rc");
    assert!(suite.contains("limit = 6\n"));
    assert!(suite.contains("\"/usr/bin/python3 "));
    assert!(ctx.read("rsn_run.sh").contains(" SiteMonitor -c "));
}

#[test]
fn command_line_beats_site_config() {
    let ctx = TestContext::with_sweep(2);
    ctx.write_site_config(SITE);

    ctx.cli().args(["create", "-m", "3", "-A", "CliMonitor"]).assert().success();

    assert!(ctx.read("suite.rc").contains("limit = 3\n"));
    assert!(ctx.read("rsn_run.sh").contains(" CliMonitor -c "));
}

#[test]
fn explicit_config_path_is_used() {
    let ctx = TestContext::with_sweep(2);
    ctx.write_file("etc/site.toml", "[general]\nexec_time_limit = \"PT9H\"\n");

    ctx.cli().args(["create", "-d", "run", "-s", "-c", "etc/site.toml"]).assert().success();

    assert!(ctx.read("suite.rc").contains("execution time limit = PT9H\n"));
}
