use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn params_prints_toml_and_writes_nothing() {
    let ctx = TestContext::with_sweep(3);
    let result = ctx.result_dir().display().to_string();

    ctx.cli()
        .args(["params", "-d", "run", "-m", "7", "--module", "PROJ"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max_index = 2\n"))
        .stdout(predicate::str::contains("max_concurrent_jobs = 7\n"))
        .stdout(predicate::str::contains(format!("fragment_base_path = \"{result}/case.conf\"")))
        .stdout(predicate::str::contains("modules = [\"PROJ\"]"));

    ctx.assert_nothing_written();
}

#[test]
fn params_alias_reports_missing_executable() {
    let ctx = TestContext::new();
    ctx.write_fragments("run", "case", 1);

    ctx.cli().args(["p", "-d", "run"]).assert().code(2);
}
