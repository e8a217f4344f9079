use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn loan_calc() -> Command {
    Command::new(cargo_bin!("loan-calc"))
}

#[test]
fn test_annuity_payment_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = loan_calc();
    cmd.args([
        "--type=annuity",
        "--principal=1000",
        "--periods=12",
        "--interest=12",
    ]);

    cmd.assert()
        .success()
        .stdout("Your monthly payment = 89!\nOverpayment = 68\n");

    Ok(())
}

#[test]
fn test_number_of_periods_end_to_end() {
    let mut cmd = loan_calc();
    cmd.args([
        "--type=annuity",
        "--principal=500000",
        "--payment=23000",
        "--interest=7.8",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "It will take 2 years to repay this loan!",
        ))
        // 24 * 23000 - 500000
        .stdout(predicate::str::contains("Overpayment = 52000"));
}

#[test]
fn test_number_of_periods_years_and_months() {
    let mut cmd = loan_calc();
    cmd.args([
        "--type=annuity",
        "--principal=1000000",
        "--payment=15000",
        "--interest=10",
    ]);

    cmd.assert()
        .success()
        .stdout("It will take 8 years and 2 months to repay this loan!\nOverpayment = 470000\n");
}

#[test]
fn test_principal_end_to_end() {
    let mut cmd = loan_calc();
    cmd.args([
        "--type=annuity",
        "--payment=8721.8",
        "--periods=120",
        "--interest=5.6",
    ]);

    cmd.assert()
        .success()
        .stdout("Your loan principal = 800000!\n");
}

#[test]
fn test_differentiated_end_to_end() {
    let mut cmd = loan_calc();
    cmd.args([
        "--type=diff",
        "--principal=500000",
        "--periods=8",
        "--interest=7.8",
    ]);

    cmd.assert().success().stdout(
        "Month 1: payment is 65750\n\
         Month 2: payment is 65344\n\
         Month 3: payment is 64938\n\
         Month 4: payment is 64532\n\
         Month 5: payment is 64125\n\
         Month 6: payment is 63719\n\
         Month 7: payment is 63313\n\
         Month 8: payment is 62907\n\
         Overpayment = 14628\n",
    );
}

#[test]
fn test_type_flag_is_case_insensitive() {
    let mut cmd = loan_calc();
    cmd.args([
        "--type", "ANNUITY", "--principal", "1000", "--periods", "12", "--interest", "12",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Your monthly payment = 89!"));
}

#[test]
fn test_annuity_without_unknown_prints_nothing() {
    let mut cmd = loan_calc();
    cmd.args([
        "--type=annuity",
        "--principal=1000",
        "--payment=89",
        "--periods=12",
        "--interest=12",
    ]);

    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_logs_stay_off_stdout() {
    let mut cmd = loan_calc();
    cmd.args([
        "--verbose",
        "--type=annuity",
        "--principal=1000",
        "--periods=12",
        "--interest=12",
    ]);

    cmd.assert()
        .success()
        .stdout("Your monthly payment = 89!\nOverpayment = 68\n")
        .stderr(predicate::str::contains("dispatching loan request"));
}
