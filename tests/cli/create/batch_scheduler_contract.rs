use crate::harness::TestContext;

#[test]
fn batch_flag_adds_scheduler_block() {
    let ctx = TestContext::with_sweep(2);

    ctx.cli()
        .args(["create", "-d", "run", "--batch", "-t", "PT2H30M", "--batch-system", "pbs"])
        .assert()
        .success();

    let suite = ctx.read("suite.rc");
    assert!(suite.contains("[[root]]"));
    assert!(suite.contains("batch system = pbs\n"));
    assert!(suite.contains("execution time limit = PT2H30M\n"));
    assert!(suite.contains("--export=NONE\n"));
}

#[test]
fn modules_wrap_the_analysis_call() {
    let ctx = TestContext::with_sweep(1);

    ctx.cli()
        .args(["create", "-d", "run", "--module", "PROJ", "--module", "UDUNITS"])
        .assert()
        .success();

    let launcher = ctx.read("rsn_run.sh");
    let load = launcher.find("module load PROJ\n").unwrap();
    let call = launcher.find("NetcdfModelMonitor -c").unwrap();
    let unload = launcher.find("module unload PROJ\n").unwrap();
    assert!(load < call && call < unload);
}

#[test]
fn no_batch_overrides_site_config() {
    let ctx = TestContext::with_sweep(2);
    ctx.write_site_config("[general]\nuse_batch_scheduler = true\n");

    ctx.cli().args(["create", "-d", "run", "--no-batch"]).assert().success();
    assert!(!ctx.read("suite.rc").contains("[[root]]"));

    ctx.cli().args(["create", "-d", "run"]).assert().success();
    assert!(ctx.read("suite.rc").contains("[[root]]"));
}
