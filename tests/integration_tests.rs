use std::path::PathBuf;

use assert_cmd::Command;
use predicates::str::contains;

/// Write an image file (big-endian origin word then body) into a temp path.
fn write_image(name: &str, origin: u16, words: &[u16]) -> PathBuf {
    let mut bytes = origin.to_be_bytes().to_vec();
    for word in words {
        bytes.extend(word.to_be_bytes());
    }
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn usage_without_arguments() {
    let mut cmd = Command::cargo_bin("tulle").unwrap();
    cmd.assert().failure().code(2);
}

#[test]
fn reports_missing_image() {
    let mut cmd = Command::cargo_bin("tulle").unwrap();
    cmd.arg("definitely-does-not-exist.lc3");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(contains("failed to load image"));
}

#[test]
fn runs_hello_image() {
    let path = write_image(
        "tulle_test_hello.lc3",
        0x3000,
        &[
            0xE002, // LEA R0, #2
            0xF022, // PUTS
            0xF025, // HALT
            0x0048, // 'H'
            0x0049, // 'I'
            0x0000,
        ],
    );

    let mut cmd = Command::cargo_bin("tulle").unwrap();
    cmd.arg(&path);

    cmd.assert()
        .success()
        .stdout(contains("HI"))
        .stdout(contains("HALT\n"));
}

#[test]
fn echoes_piped_input() {
    let path = write_image(
        "tulle_test_echo.lc3",
        0x3000,
        &[
            0xF020, // GETC
            0xF021, // OUT
            0xF025, // HALT
        ],
    );

    let mut cmd = Command::cargo_bin("tulle").unwrap();
    cmd.arg(&path).write_stdin("A");

    // OUT echoes the byte right before the HALT banner
    cmd.assert().success().stdout(contains("AHALT\n"));
}

#[test]
fn putsp_unpacks_bytes() {
    let path = write_image(
        "tulle_test_putsp.lc3",
        0x3000,
        &[
            0xE002, // LEA R0, #2
            0xF024, // PUTSP
            0xF025, // HALT
            0x4241, // 'A' then 'B'
            0x0000,
        ],
    );

    let mut cmd = Command::cargo_bin("tulle").unwrap();
    cmd.arg(&path);

    cmd.assert()
        .success()
        .stdout(contains("AB"))
        .stdout(contains("HALT\n"));
}

#[test]
fn loads_multiple_images() {
    let code = write_image(
        "tulle_test_multi_code.lc3",
        0x3000,
        &[
            0x2002, // LD R0, #2
            0xF022, // PUTS
            0xF025, // HALT
            0x4000, // address of the string
        ],
    );
    let data = write_image(
        "tulle_test_multi_data.lc3",
        0x4000,
        &[0x0059, 0x004F, 0x0000], // "YO"
    );

    let mut cmd = Command::cargo_bin("tulle").unwrap();
    cmd.arg(&code).arg(&data);

    cmd.assert()
        .success()
        .stdout(contains("YO"))
        .stdout(contains("HALT\n"));
}

#[test]
fn aborts_on_illegal_opcode() {
    let path = write_image("tulle_test_rti.lc3", 0x3000, &[0x8000]);

    let mut cmd = Command::cargo_bin("tulle").unwrap();
    cmd.arg(&path);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(contains("Illegal instruction"));
}
