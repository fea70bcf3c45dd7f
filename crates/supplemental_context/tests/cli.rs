// crates/supplemental_context/tests/cli.rs

use assert_cmd::Command;
use assert_fs::prelude::{FileWriteStr, PathChild};
use assert_fs::TempDir;
use predicates::prelude::*;

fn order_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    temp.child("src/Order.java")
        .write_str("public class Order {\n    public int total() { return 0; }\n}\n")
        .unwrap();
    temp.child("src/OrderRepository.java")
        .write_str(
            "public class OrderRepository {\n    public List<Order> loadOrders(String id) { return null; }\n}\n",
        )
        .unwrap();
    temp.child("src/ui/Widget.java")
        .write_str("public class Widget {\n    public void render() {}\n}\n")
        .unwrap();
    temp.child("src/tests/OrderCheck.java")
        .write_str("public class OrderCheck {\n    public void checkTotal() {}\n}\n")
        .unwrap();
    temp
}

#[test]
fn prints_ranked_candidates() {
    let temp = order_project();
    Command::cargo_bin("supplemental_context")
        .unwrap()
        .arg(temp.child("src/Order.java").path())
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2\t0\tsrc/OrderRepository.java"))
        .stdout(predicate::str::contains("0\t1\tsrc/ui/Widget.java"))
        .stdout(predicate::str::contains("OrderCheck").not());
}

#[test]
fn include_tests_flag_keeps_test_files() {
    let temp = order_project();
    Command::cargo_bin("supplemental_context")
        .unwrap()
        .arg(temp.child("src/Order.java").path())
        .arg("--root")
        .arg(temp.path())
        .arg("--include-tests")
        .assert()
        .success()
        .stdout(predicate::str::contains("src/tests/OrderCheck.java"));
}

#[test]
fn limit_caps_the_output() {
    let temp = order_project();
    Command::cargo_bin("supplemental_context")
        .unwrap()
        .arg(temp.child("src/Order.java").path())
        .arg("--root")
        .arg(temp.path())
        .arg("--limit")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("OrderRepository"))
        .stdout(predicate::str::contains("Widget").not());
}

#[test]
fn unsupported_extension_fails() {
    let temp = TempDir::new().unwrap();
    temp.child("main.go").write_str("package main\n").unwrap();
    Command::cargo_bin("supplemental_context")
        .unwrap()
        .arg(temp.child("main.go").path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported language"));
}

#[test]
fn missing_focal_file_fails() {
    let temp = TempDir::new().unwrap();
    Command::cargo_bin("supplemental_context")
        .unwrap()
        .arg(temp.child("Missing.java").path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to resolve focal file"));
}
