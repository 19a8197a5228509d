use std::process::{Command, Output};

fn stepstat(args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stepstat"));
    cmd.args(args)
        .env_remove("STEPSTAT_WEIGHT")
        .env_remove("STEPSTAT_HEIGHT")
        .env_remove("RUST_LOG")
        .env("STEPSTAT_LOG", "off");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to run stepstat")
}

#[test]
fn day_reads_body_from_env() {
    let out = stepstat(
        &["day", "6000,45m"],
        &[("STEPSTAT_WEIGHT", "70"), ("STEPSTAT_HEIGHT", "180")],
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        format!("{}\n", stepstat::day_action_info("6000,45m", 70.0, 180.0).unwrap())
    );
}

#[test]
fn training_reads_body_from_flags() {
    let out = stepstat(&["training", "6000,Бег,45m", "--weight", "70", "--height", "180"], &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Тип тренировки: Бег\n"));
    assert!(out.stderr.is_empty());
}

#[test]
fn unknown_activity_exits_with_error() {
    let out = stepstat(
        &["training", "6000,Плавание,45m", "--weight", "70", "--height", "180"],
        &[],
    );
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("UnknownActivity"), "stderr: {}", stderr);
    assert!(stderr.contains("Плавание"));
}
