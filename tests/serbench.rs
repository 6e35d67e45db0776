use crate::util::*;
mod util;

#[test]
fn small_run_reports_every_codec() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = TempDir::new()?;
    let mut cmd = small_run(tmp_dir.path())?;

    cmd.assert().success();

    assert_no_errors_or_warn(&cmd.output()?.stderr)?;
    validate_report(&cmd.output()?.stdout)?;

    Ok(())
}

#[test]
fn small_run_writes_one_artifact_per_codec() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = TempDir::new()?;
    let mut cmd = small_run(tmp_dir.path())?;

    cmd.assert().success();

    for file in ARTIFACT_FILES {
        tmp_dir.child(file).assert(predicate::path::is_file());
    }
    // The JSON artifact is the fixture itself
    tmp_dir
        .child("json.json")
        .assert(predicate::str::starts_with(r#"{"name":"some_name","id":12345,"#));
    tmp_dir
        .child("xml.xml")
        .assert(predicate::str::starts_with("<fixture><name>some_name</name>"));

    Ok(())
}

#[test]
fn codec_selection() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = TempDir::new()?;
    let mut cmd = small_run(tmp_dir.path())?;
    cmd.arg("-c").arg("yaml,native");

    cmd.assert().success();

    // Always canonical order
    match_on_output(&cmd.output()?.stdout, "(?s)bincode.*YAML", 1)?;
    match_on_output(&cmd.output()?.stdout, "MessagePack", 0)?;
    tmp_dir.child("native.bin").assert(predicate::path::is_file());
    tmp_dir.child("yaml.yaml").assert(predicate::path::is_file());
    tmp_dir.child("json.json").assert(predicate::path::missing());

    Ok(())
}

#[test]
fn verbose_run_logs_each_codec() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = TempDir::new()?;
    let mut cmd = small_run(tmp_dir.path())?;
    cmd.arg("-v").arg("2");

    cmd.assert().success();

    match_on_out_no_case(&cmd.output()?.stderr, "benchmarking .* with 3 trials", 6)?;

    Ok(())
}

#[test]
fn stats_json_to_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = TempDir::new()?;
    let mut cmd = small_run(tmp_dir.path())?;
    cmd.arg("-S").arg("stdout").arg("-D").arg("json");

    cmd.assert().success();

    let stdout = cmd.output()?.stdout;
    validate_report(&stdout)?;
    match_on_output(&stdout, r#""encoded_size_bytes": \d+"#, 6)?;
    match_on_output(&stdout, r#""codec": "protobuf""#, 1)?;

    Ok(())
}

#[test]
fn stats_toml_to_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = TempDir::new()?;
    let stats_file = tmp_dir.child("stats.toml");
    let mut cmd = small_run(tmp_dir.path())?;
    cmd.arg("-S").arg(stats_file.path()).arg("-D").arg("toml");

    cmd.assert().success();

    stats_file.assert(predicate::str::contains("[[codecs]]"));
    stats_file.assert(predicate::str::contains(r#"codec = "MessagePack""#));

    Ok(())
}

#[test]
fn generate_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("serbench")?;
    cmd.arg("--generate-completions").arg("bash");

    cmd.assert().success();

    match_on_out_no_case(&cmd.output()?.stdout, "_serbench\\(\\)", 1)?;
    // Nothing is benchmarked
    match_on_out_no_case(&cmd.output()?.stdout, "benchmarked in", 0)?;

    Ok(())
}
