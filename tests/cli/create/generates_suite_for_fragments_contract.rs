use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn create_generates_launcher_and_suite_for_three_fragments() {
    let ctx = TestContext::with_sweep(3);
    let work = ctx.work_dir().display().to_string();
    let result = ctx.result_dir().display().to_string();

    ctx.cli()
        .args(["create", "-d", "run", "-m", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("✅ Run script is {work}/rsn_run.sh")))
        .stdout(predicate::str::contains(format!("✅ Cylc suite file is {work}/suite.rc")));

    let launcher = ctx.read("rsn_run.sh");
    assert!(launcher.starts_with("#!/bin/sh\n"));
    assert!(launcher.contains(&format!(
        "{work}/abrun.sh NetcdfModelMonitor -c {result}/case.conf_${{1}} -v\n"
    )));

    let suite = ctx.read("suite.rc");
    assert!(suite.contains("procid = 0..2\n"));
    assert!(suite.contains("limit = 2\n"));
    assert!(suite.contains(&format!("sh {work}/rsn_run.sh ${{CYLC_TASK_PARAM_procid}}")));
    assert!(suite.contains(&format!("python {work}/stitch_netcdf_files.py -d {result}")));
    assert!(!suite.contains("[[root]]"));
}

#[cfg(unix)]
#[test]
fn launcher_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let ctx = TestContext::with_sweep(1);
    ctx.cli().args(["c", "-d", "run"]).assert().success();

    let mode = std::fs::metadata(ctx.work_dir().join("rsn_run.sh")).unwrap().permissions().mode();
    assert_eq!(mode & 0o111, 0o111);
}

#[test]
fn regenerating_yields_identical_files() {
    let ctx = TestContext::with_sweep(4);

    ctx.cli().args(["create", "-d", "run", "-s"]).assert().success();
    let first = (ctx.read("rsn_run.sh"), ctx.read("suite.rc"));

    ctx.cli().args(["create", "-d", "run", "-s"]).assert().success();
    let second = (ctx.read("rsn_run.sh"), ctx.read("suite.rc"));

    assert_eq!(first, second);
}
