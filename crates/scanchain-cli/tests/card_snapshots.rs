use assert_cmd::Command;

// {"id":"A102","status":"Accepted","grossWeight":120,"confidenceScore":0.873,
//  "farmerName":"J. Otieno"}
const PAYLOAD: &str = "%7B%22id%22%3A%22A102%22%2C%22status%22%3A%22Accepted%22%2C%22grossWeight%22%3A120%2C%22confidenceScore%22%3A0.873%2C%22farmerName%22%3A%22J.%20Otieno%22%7D";

fn render(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("scanchain").unwrap();
    let output = cmd.args(args).output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_passport_card_layout() {
    let url = format!("https://scan.example/batch?data={}", PAYLOAD);
    let card = render(&["show", &url, "--color", "never"]);
    insta::assert_snapshot!(card, @r"
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
  Scanchain
  Batch Passport
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

  Batch ID  #A102
  Status    ● Accepted

  BATCH DETAILS
  ⚖️ Gross Weight      120 kg
  ✅ Confidence Score  87.3%

  FARMER INFORMATION
  👨‍🌾 Farmer Name       J. Otieno

  🔒 Verified by Scanchain
     This batch passport is cryptographically linked to the original record.

  Scanchain · Secure Agricultural Batch Tracking
    ");
}

#[test]
fn test_missing_data_card_layout() {
    let card = render(&["show", "https://scan.example/batch", "--color", "never"]);
    insta::assert_snapshot!(card, @r"
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
  Scanchain
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

  ⚠️ Invalid QR Code
  No batch data found. Please scan a valid Scanchain QR code.

  Scan a valid Scanchain batch QR code to view batch details.
    ");
}
