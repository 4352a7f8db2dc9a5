use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Run envrender with given args.
fn envrender() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("envrender");
    cmd.env_remove("ENVRENDER_CONFIG");
    cmd
}

const ENV_FILE: &str = "# service settings\nDB_HOST=db.internal\nAPI_KEY=\"s3cr3t\"\nexport PORT=8080\n";

// ─── Kubernetes ConfigMap ───────────────────────────────────────

#[test]
fn configmap_renders_metadata_and_data() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child(".env").write_str(ENV_FILE).unwrap();

    envrender()
        .current_dir(dir.path())
        .args([
            "-type",
            "kubernetes-configmap",
            "-namespace",
            "ns",
            "-name",
            "n",
            "-env-file",
            ".env",
            "-output-file",
            "configmap.yaml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote kubernetes-configmap"))
        .stdout(predicate::str::contains("(3 variables)"));

    dir.child("configmap.yaml").assert(
        "apiVersion: v1\n\
         kind: ConfigMap\n\
         metadata:\n  \
         namespace: ns\n  \
         name: n\n\
         data:\n  \
         API_KEY: \"s3cr3t\"\n  \
         DB_HOST: \"db.internal\"\n  \
         PORT: \"8080\"\n",
    );
}

#[test]
fn configmap_data_matches_env_file_entries() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("prod.env")
        .write_str("B=2\nA=1\nC='three'\nB=two\n")
        .unwrap();

    envrender()
        .current_dir(dir.path())
        .args([
            "--type=kubernetes-configmap",
            "--namespace=prod",
            "--name=cfg",
            "--env-file=prod.env",
            "--output-file=out.yaml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("B is defined more than once"));

    let out = std::fs::read_to_string(dir.path().join("out.yaml")).unwrap();
    let data: Vec<&str> = out
        .split("data:\n")
        .nth(1)
        .unwrap()
        .lines()
        .collect();
    assert_eq!(data, vec!["  A: \"1\"", "  B: \"two\"", "  C: \"three\""]);
}

#[test]
fn configmap_without_namespace_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child(".env").write_str(ENV_FILE).unwrap();

    envrender()
        .current_dir(dir.path())
        .args([
            "-type",
            "kubernetes-configmap",
            "-name",
            "n",
            "-env-file",
            ".env",
            "-output-file",
            "out.yaml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing -namespace flag"));

    dir.child("out.yaml").assert(predicate::path::missing());
}

#[test]
fn configmap_without_name_fails_before_writing() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child(".env").write_str(ENV_FILE).unwrap();

    envrender()
        .current_dir(dir.path())
        .args([
            "-type",
            "kubernetes-configmap",
            "-namespace",
            "ns",
            "-env-file",
            ".env",
            "-output-file",
            "out.yaml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing -name flag"));

    dir.child("out.yaml").assert(predicate::path::missing());
}

// ─── App Engine ─────────────────────────────────────────────────

fn appengine_args() -> Vec<&'static str> {
    vec![
        "-type",
        "appengine",
        "-name",
        "api",
        "-runtime",
        "python39",
        "-env",
        "flex",
        "-command",
        "gunicorn -b :$PORT main:app",
        "-env-file",
        ".env",
        "-output-file",
        "app.yaml",
    ]
}

#[test]
fn appengine_renders_all_blocks() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child(".env").write_str("DEBUG=false\n").unwrap();

    envrender()
        .current_dir(dir.path())
        .args(appengine_args())
        .args([
            "-disable-healthcheck",
            "-scaling-min",
            "1",
            "-scaling-max",
            "5",
            "-scaling-cpu",
            "0.65",
            "-resources-memory",
            "2",
            "-resources-cpu-count",
            "1",
        ])
        .assert()
        .success();

    dir.child("app.yaml").assert(
        "service: api\n\
         runtime: python39\n\
         env: flex\n\
         entrypoint: gunicorn -b :$PORT main:app\n\
         \n\
         health_check:\n  \
         enable_health_check: false\n\
         \n\
         automatic_scaling:\n  \
         min_num_instances: 1\n  \
         max_num_instances: 5\n  \
         cpu_utilization:\n    \
         target_utilization: 0.65\n\
         \n\
         resources:\n  \
         memory_gb: 2\n  \
         cpu: 1\n\
         \n\
         env_variables:\n  \
         DEBUG: \"false\"\n",
    );
}

#[test]
fn appengine_disabled_blocks_are_omitted() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child(".env").write_str(ENV_FILE).unwrap();

    envrender()
        .current_dir(dir.path())
        .args(appengine_args())
        .args(["-scaling=false", "-resources=false"])
        .assert()
        .success();

    let out = std::fs::read_to_string(dir.path().join("app.yaml")).unwrap();
    assert!(!out.contains("automatic_scaling"));
    assert!(!out.contains("resources:"));
    assert!(!out.contains("health_check"));
    assert!(out.contains("env_variables:\n  API_KEY: \"s3cr3t\"\n"));
}

#[test]
fn appengine_scaling_requires_sub_flags() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child(".env").write_str(ENV_FILE).unwrap();

    envrender()
        .current_dir(dir.path())
        .args(appengine_args())
        .args(["-scaling-min", "1", "-resources=false"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing -scaling-max flag"));

    dir.child("app.yaml").assert(predicate::path::missing());
}

#[test]
fn appengine_resources_requires_sub_flags() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child(".env").write_str(ENV_FILE).unwrap();

    envrender()
        .current_dir(dir.path())
        .args(appengine_args())
        .args(["-scaling=false", "-resources-memory", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing -resources-cpu-count flag"));
}

#[test]
fn appengine_without_name_fails_before_writing() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child(".env").write_str(ENV_FILE).unwrap();

    envrender()
        .current_dir(dir.path())
        .args([
            "-type",
            "appengine",
            "-runtime",
            "go122",
            "-env",
            "standard",
            "-command",
            "./server",
            "-env-file",
            ".env",
            "-output-file",
            "app.yaml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing -name flag"));

    dir.child("app.yaml").assert(predicate::path::missing());
}

// ─── Type selection and inputs ──────────────────────────────────

#[test]
fn unknown_type_fails_without_output() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child(".env").write_str(ENV_FILE).unwrap();

    envrender()
        .current_dir(dir.path())
        .args([
            "-type",
            "helm",
            "-name",
            "n",
            "-env-file",
            ".env",
            "-output-file",
            "out.yaml",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("type not found"));

    dir.child("out.yaml").assert(predicate::path::missing());
}

#[test]
fn missing_type_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    envrender()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("type not found"));
}

#[test]
fn missing_env_file_flag_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    envrender()
        .current_dir(dir.path())
        .args([
            "-type",
            "kubernetes-configmap",
            "-namespace",
            "ns",
            "-name",
            "n",
            "-output-file",
            "out.yaml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing -env-file flag"));
}

#[test]
fn nonexistent_env_file_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    envrender()
        .current_dir(dir.path())
        .args([
            "-type",
            "kubernetes-configmap",
            "-namespace",
            "ns",
            "-name",
            "n",
            "-env-file",
            "nope.env",
            "-output-file",
            "out.yaml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn malformed_env_file_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child(".env").write_str("GOOD=1\nNOT A VARIABLE\n").unwrap();

    envrender()
        .current_dir(dir.path())
        .args([
            "-type",
            "kubernetes-configmap",
            "-namespace",
            "ns",
            "-name",
            "n",
            "-env-file",
            ".env",
            "-output-file",
            "out.yaml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));

    dir.child("out.yaml").assert(predicate::path::missing());
}

#[test]
fn unwritable_output_path_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child(".env").write_str(ENV_FILE).unwrap();

    envrender()
        .current_dir(dir.path())
        .args([
            "-type",
            "kubernetes-configmap",
            "-namespace",
            "ns",
            "-name",
            "n",
            "-env-file",
            ".env",
            "-output-file",
            "missing-dir/out.yaml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn quiet_suppresses_success_output() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child(".env").write_str(ENV_FILE).unwrap();

    envrender()
        .current_dir(dir.path())
        .args([
            "-q",
            "-type",
            "kubernetes-configmap",
            "-namespace",
            "ns",
            "-name",
            "n",
            "-env-file",
            ".env",
            "-output-file",
            "out.yaml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    dir.child("out.yaml").assert(predicate::path::exists());
}

#[test]
fn verbose_lists_loaded_keys() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child(".env").write_str(ENV_FILE).unwrap();

    envrender()
        .current_dir(dir.path())
        .args([
            "--verbose",
            "-type",
            "kubernetes-configmap",
            "-namespace",
            "ns",
            "-name",
            "n",
            "-env-file",
            ".env",
            "-output-file",
            "out.yaml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("DB_HOST"))
        .stdout(predicate::str::contains("output file: out.yaml"));
}

#[test]
fn multiline_quoted_value_is_rendered() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child(".env")
        .write_str("CERT=\"-----BEGIN CERT-----\nMIIB\n-----END CERT-----\"\nB=2\n")
        .unwrap();

    envrender()
        .current_dir(dir.path())
        .args([
            "-type",
            "kubernetes-configmap",
            "-namespace",
            "ns",
            "-name",
            "n",
            "-env-file",
            ".env",
            "-output-file",
            "out.yaml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 variables)"));

    let out = std::fs::read_to_string(dir.path().join("out.yaml")).unwrap();
    assert!(out.ends_with(
        "data:\n  B: \"2\"\n  CERT: \"-----BEGIN CERT-----\nMIIB\n-----END CERT-----\"\n"
    ));
}

#[test]
fn env_file_directory_is_reported() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("config").create_dir_all().unwrap();

    envrender()
        .current_dir(dir.path())
        .args([
            "-type",
            "kubernetes-configmap",
            "-namespace",
            "ns",
            "-name",
            "n",
            "-env-file",
            "config",
            "-output-file",
            "out.yaml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a regular file"));
}

#[test]
fn non_utf8_env_file_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child(".env").write_binary(b"A=1\nB=caf\xe9\n").unwrap();

    envrender()
        .current_dir(dir.path())
        .args([
            "-type",
            "kubernetes-configmap",
            "-namespace",
            "ns",
            "-name",
            "n",
            "-env-file",
            ".env",
            "-output-file",
            "out.yaml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid UTF-8"));

    dir.child("out.yaml").assert(predicate::path::missing());
}

#[test]
fn flag_values_may_start_with_a_dash() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child(".env").write_str(ENV_FILE).unwrap();

    envrender()
        .current_dir(dir.path())
        .args([
            "-type",
            "kubernetes-configmap",
            "-namespace",
            "-ns",
            "-name",
            "-env",
            "-env-file",
            ".env",
            "-output-file",
            "out.yaml",
        ])
        .assert()
        .success();

    let out = std::fs::read_to_string(dir.path().join("out.yaml")).unwrap();
    assert!(out.contains("metadata:\n  namespace: -ns\n  name: -env\n"));
}
