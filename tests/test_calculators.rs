//! End-to-end tests for the calculator commands

mod support;
use support::harness::TestHarness;

// ============================================================================
// FERMENTATION
// ============================================================================

#[test]
fn test_abv() {
    let harness = TestHarness::with_unit("metric");
    let output = harness.stdout(&["abv", "--og", "1.05", "--fg", "1.02"]);
    assert_eq!(output, "Estimated ABV: 3.94%\n");
}

#[test]
fn test_abv_adjusted() {
    let harness = TestHarness::with_unit("metric");
    let output = harness.stdout(&["abv", "--og", "1.05", "--fg", "1.02", "--adjust"]);
    assert_eq!(output, "Estimated ABV: 5.63%\n");
}

#[test]
fn test_abv_high_fg() {
    let harness = TestHarness::with_unit("metric");
    let output = harness.run(&["abv", "--og", "1.05", "--fg", "1.06"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Final gravity cannot be higher than original gravity"));
}

#[test]
fn test_abv_range() {
    let harness = TestHarness::with_unit("metric");
    let output = harness.run(&["abv", "--og", "2.0", "--fg", "1.06"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Value must be between 1.0 and 1.2"));
}

#[test]
fn test_missing_value_without_terminal() {
    let harness = TestHarness::with_unit("metric");
    let output = harness.run(&["abv", "--og", "1.05"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--fg"));
}

#[test]
fn test_attenuation() {
    let harness = TestHarness::with_unit("metric");
    let output = harness.stdout(&["attenuation", "--og", "1.032", "--fg", "1.015"]);
    assert_eq!(
        output,
        "Apparent attenuation: 52.46%\nReal attenuation: 42.98%\n"
    );
}

#[test]
fn test_fg_from_att() {
    let harness = TestHarness::with_unit("metric");
    let output = harness.stdout(&["fg-from-att", "--og", "1.04", "--att", "49"]);
    assert_eq!(output, "FG for 49% attenuation: 1.020\n");
}

// ============================================================================
// PACKAGING
// ============================================================================

#[test]
fn test_kegpsi() {
    let harness = TestHarness::with_unit("metric");
    let output = harness.stdout(&["kegpsi", "--vol", "2.0", "--temp", "15"]);
    assert_eq!(output, "Keg pressure required: 15.49psi\n");
}

#[test]
fn test_kegpsi_imperial_flag() {
    let harness = TestHarness::with_unit("metric");
    let output = harness.stdout(&[
        "--unit", "imperial", "kegpsi", "--vol", "2.0", "--temp", "36",
    ]);
    assert_eq!(output, "Keg pressure required: 5.27psi\n");
}

#[test]
fn test_prime() {
    let harness = TestHarness::with_unit("metric");
    let output = harness.stdout(&["prime", "--beer", "19", "--vol", "2.2", "--temp", "15"]);
    assert_eq!(
        output,
        "\nUse only one of the following:\nTable sugar: 90.87g\nCorn Sugar: 99.91g\nDME: 133.63g\n"
    );
}

#[test]
fn test_prime_imperial_quiet() {
    let harness = TestHarness::with_unit("imperial");
    let output = harness.stdout(&["-q", "prime", "--beer", "5", "--vol", "2.2", "--temp", "68"]);
    assert_eq!(
        output,
        "Table sugar: 3.59oz\nCorn Sugar: 3.94oz\nDME: 5.27oz\n"
    );
}

// ============================================================================
// MASH AND BOIL
// ============================================================================

#[test]
fn test_infuse() {
    let harness = TestHarness::with_unit("metric");
    let output = harness.stdout(&[
        "infuse",
        "--temp=66",
        "--target=70",
        "--ratio=1",
        "--grain=5",
        "--water=100",
    ]);
    assert_eq!(output, "Infuse with 0.80 liters @ 100.0C\n");
}

#[test]
fn test_infuse_imperial() {
    let harness = TestHarness::with_unit("imperial");
    let output = harness.stdout(&[
        "infuse",
        "--temp=152",
        "--target=168",
        "--ratio=1.5",
        "--grain=10",
        "--water=212",
    ]);
    assert_eq!(output, "Infuse with 6.18 quarts @ 212.0F\n");
}

#[test]
fn test_infuse_water_at_target() {
    let harness = TestHarness::with_unit("imperial");
    let output = harness.run(&[
        "infuse",
        "--temp=150",
        "--target=160",
        "--ratio=1.25",
        "--grain=8",
        "--water=160",
    ]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Infuse with 0.00 quarts @ 160.0F\n"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("no infusion possible"));
}

#[test]
fn test_strike() {
    let harness = TestHarness::with_unit("imperial");
    let output = harness.stdout(&["strike", "--grain", "10", "--vol", "3.5", "--temp", "152"]);
    assert_eq!(output, "Strike water temp should be 167.143F\n");
}

#[test]
fn test_dme() {
    let harness = TestHarness::with_unit("imperial");
    let output = harness.stdout(&["dme", "--points", "5", "--vol", "3.25"]);
    assert_eq!(
        output,
        "Add 5.91oz of DME to raise the wort gravity by 5 points\n"
    );
}

// ============================================================================
// ADJUSTMENTS
// ============================================================================

#[test]
fn test_adjust_gravity() {
    let harness = TestHarness::with_unit("metric");
    let output = harness.stdout(&["adjust-gravity", "--og=1.04", "--vol=4", "--ng=1.07"]);
    assert_eq!(
        output,
        "\nNew volume of wort will be 2.29\nBoil off 1.71 liter of wort\n"
    );
}

#[test]
fn test_adjust_volume() {
    let harness = TestHarness::with_unit("metric");
    let output = harness.stdout(&["adjust-volume", "--og=1.04", "--vol=5", "--newvol=3"]);
    assert_eq!(output, "The new gravity will be 1.067\n");
}

#[test]
fn test_adjust_sg() {
    let harness = TestHarness::with_unit("imperial");
    let output = harness.stdout(&["adjust-sg", "--sg=1.05", "--temp=80", "--caltemp=60"]);
    assert_eq!(output, "Adjusted gravity at 80.000F is: 1.052\n");
}

// ============================================================================
// CONVERT
// ============================================================================

#[test]
fn test_convert_temperature() {
    let harness = TestHarness::new();
    let output = harness.stdout(&["convert", "temp", "100"]);
    assert_eq!(output, "100 C => 212.000 F\n100 F => 37.778 C\n");
}

#[test]
fn test_convert_does_not_need_config() {
    let harness = TestHarness::new();
    harness.stdout(&["convert", "mass", "1"]);
    assert!(!harness.config_path.exists());
}

#[test]
fn test_convert_rejects_unknown_measure() {
    let harness = TestHarness::new();
    let output = harness.run(&["convert", "speed", "1"]);
    assert!(!output.status.success());
}
