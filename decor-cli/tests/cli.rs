use predicates::prelude::*;
use serde_json::Value;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct ConfigFile {
    _dir: TempDir,
    path: PathBuf,
}

fn write_config(contents: &str) -> Result<ConfigFile, Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("decor.toml");
    fs::write(&path, contents)?;
    Ok(ConfigFile { _dir: dir, path })
}

fn decor() -> Result<assert_cmd::Command, Box<dyn Error>> {
    Ok(assert_cmd::Command::cargo_bin("decor")?)
}

#[test]
fn say_applies_styles_outermost_first() -> Result<(), Box<dyn Error>> {
    decor()?
        .args(["say", "hello", "--style", "bold", "--style", "shout"])
        .assert()
        .success()
        .stdout("<b>HELLO!!!</b>\n");

    decor()?
        .args(["say", "T", "--style", "italic", "--style", "bold"])
        .assert()
        .success()
        .stdout("<i><b>T</b></i>\n");
    Ok(())
}

#[test]
fn search_prints_full_name() -> Result<(), Box<dyn Error>> {
    decor()?
        .args(["search", "wilma"])
        .assert()
        .success()
        .stdout("Wilma Flintstone\n");
    Ok(())
}

#[test]
fn search_unknown_username_fails() -> Result<(), Box<dyn Error>> {
    decor()?
        .args(["search", "dino"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dino"));
    Ok(())
}

#[test]
fn gated_search_with_correct_credential() -> Result<(), Box<dyn Error>> {
    decor()?
        .args(["search", "barney", "--style", "bold", "--auth", "--credential", "secret"])
        .assert()
        .success()
        .stdout("<b>Barney Rubble</b>\n");
    Ok(())
}

#[test]
fn gated_search_reads_stdin() -> Result<(), Box<dyn Error>> {
    decor()?
        .args(["search", "fred", "--auth"])
        .write_stdin("secret\n")
        .assert()
        .success()
        .stdout("Fred Flintstone\n")
        .stderr(predicate::str::contains("Enter secret: "));
    Ok(())
}

#[test]
fn denied_lookup_prints_notice_only() -> Result<(), Box<dyn Error>> {
    decor()?
        .args(["lookup", "0", "--auth", "--credential", "open-sesame"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Nooo...!"));
    Ok(())
}

#[test]
fn closed_stdin_is_denied() -> Result<(), Box<dyn Error>> {
    decor()?
        .args(["lookup", "0", "--auth"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Nooo...!"));
    Ok(())
}

#[test]
fn lookup_json_envelope() -> Result<(), Box<dyn Error>> {
    let output = decor()?
        .args(["lookup", "0"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output)?;
    assert_eq!(
        value["header"],
        serde_json::json!(["username", "full_name", "show", "gendergroup", "agegroup"])
    );
    assert_eq!(
        value["data"],
        serde_json::json!(["fred", "Fred Flintstone", "flintstones", "m", "adults"])
    );
    Ok(())
}

#[test]
fn lookup_csv_with_header() -> Result<(), Box<dyn Error>> {
    decor()?
        .args([
            "lookup",
            "2",
            "--format",
            "csv",
            "--delimiter",
            ";",
            "--header",
            "--auth",
            "--credential",
            "secret",
        ])
        .assert()
        .success()
        .stdout(
            "username;full_name;show;gendergroup;agegroup\npebbles;Pebbles Flintstone;flintstones;f;kids\n",
        );
    Ok(())
}

#[test]
fn lookup_out_of_range_fails() -> Result<(), Box<dyn Error>> {
    decor()?
        .args(["lookup", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IndexOutOfRange"));
    Ok(())
}

#[test]
fn list_csv_prints_every_row() -> Result<(), Box<dyn Error>> {
    let output = decor()?
        .args(["list", "--format", "csv", "--header"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "username,full_name,show,gendergroup,agegroup");
    assert_eq!(lines[5], "betty,Betty Rubble,flintstones,f,adults");
    Ok(())
}

#[test]
fn list_json_lines_parse() -> Result<(), Box<dyn Error>> {
    let output = decor()?
        .args(["list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output)?;
    let usernames: Vec<String> = stdout
        .lines()
        .map(|line| {
            let value: Value = serde_json::from_str(line).unwrap();
            value["data"][0].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(usernames, ["fred", "wilma", "pebbles", "barney", "betty"]);
    Ok(())
}

#[test]
fn config_file_sets_secret_and_csv() -> Result<(), Box<dyn Error>> {
    let config = write_config(
        "[gate]\nsecret = \"yabba\"\ndenial_notice = \"Go away\"\n\n[csv]\ndelimiter = \"|\"\n",
    )?;
    let config_path = config.path.to_str().unwrap();

    decor()?
        .args([
            "lookup",
            "4",
            "--format",
            "csv",
            "--auth",
            "--credential",
            "yabba",
            "--config",
            config_path,
        ])
        .assert()
        .success()
        .stdout("betty|Betty Rubble|flintstones|f|adults\n");

    decor()?
        .args(["lookup", "4", "--auth", "--credential", "secret", "--config", config_path])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Go away"));
    Ok(())
}

#[test]
fn invalid_config_is_reported() -> Result<(), Box<dyn Error>> {
    let config = write_config("[gate]\npassword = \"x\"\n")?;
    decor()?
        .args(["list", "--config", config.path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config"));
    Ok(())
}
