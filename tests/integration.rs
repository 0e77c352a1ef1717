use std::{fs, path::PathBuf, process::Command};

fn run_bin(args: &[&str]) -> std::process::Output {
    let bin = PathBuf::from(env!("CARGO_BIN_EXE_panmixia"));

    Command::new(bin)
        .args(args)
        .output()
        .expect("failed to execute command")
}

fn run_bin_ok(args: &[&str]) {
    let output = run_bin(args);

    let stdout_str =
        std::str::from_utf8(&output.stdout).expect("failed to convert stdout to string");
    let stderr_str =
        std::str::from_utf8(&output.stderr).expect("failed to convert stderr to string");

    assert!(
        output.status.success(),
        "failed to run binary with {args:?}\nstdout:\n{stdout_str}\nstderr:\n{stderr_str}\n"
    );
}

#[test]
fn basic_workflow() {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("basic_workflow");

    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir(&test_dir).expect("failed to create test directory");

    let config_path = test_dir.join("config.toml");
    let config_contents = String::new()
        + "[population]\n"
        + "p_init = 0.6\n"
        + "n_pop = 1000\n"
        + "\n"
        + "[forces]\n"
        + "rate_mut = 0.01\n"
        + "\n"
        + "[run]\n"
        + "n_gen = 25\n";

    fs::write(&config_path, config_contents).expect("failed to write config file");

    let config_str = config_path
        .to_str()
        .expect("failed to convert config path to string");

    let results_path = test_dir.join("results.json");
    let results_str = results_path
        .to_str()
        .expect("failed to convert results path to string");

    run_bin_ok(&["--config", config_str, "equilibrium"]);
    run_bin_ok(&["--config", config_str, "--output", results_str, "evolve"]);

    let results = fs::read_to_string(&results_path).expect("failed to read results file");
    let results: serde_json::Value =
        serde_json::from_str(&results).expect("failed to parse results file");

    assert_eq!(results["records"].as_array().map(Vec::len), Some(25));
    assert_eq!(results["summary"]["status"], "Evolving");
    assert_eq!(results["summary"]["has_evolved"], true);
    assert_eq!(results["initial"]["counts"]["Aa"], 480);

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn rejects_out_of_range_config() {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("rejects_out_of_range_config");

    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir(&test_dir).expect("failed to create test directory");

    let config_path = test_dir.join("config.toml");
    let config_contents = String::new()
        + "[population]\n"
        + "p_init = 1.5\n"
        + "n_pop = 1000\n"
        + "\n"
        + "[run]\n"
        + "n_gen = 10\n";

    fs::write(&config_path, config_contents).expect("failed to write config file");

    let config_str = config_path
        .to_str()
        .expect("failed to convert config path to string");

    let output = run_bin(&["--config", config_str, "evolve"]);
    assert!(!output.status.success());

    fs::remove_dir_all(&test_dir).ok();
}
