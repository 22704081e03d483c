use crate::{Config, ValidationConfig};
use crate::tests::{EnvGuard, setup_config_dir};
use crate::validation_config::{MAX_TITLE_LENGTH, MIN_PROJECT_NAME_LENGTH, MIN_TITLE_LENGTH};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use ospo_core::ValidationLimits;
use serial_test::serial;

const BELOW_MIN_TITLE: usize = MIN_TITLE_LENGTH - 1;
const ABOVE_MAX_TITLE: usize = MAX_TITLE_LENGTH + 1;
const BELOW_MIN_PROJECT_NAME: usize = MIN_PROJECT_NAME_LENGTH - 1;

// =========================================================================
// Validation Tests - Validation Config
// =========================================================================

#[test]
#[serial]
fn given_min_title_length_zero_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _length = EnvGuard::set(
        "OSPO_VALIDATION_MIN_TITLE_LENGTH",
        &BELOW_MIN_TITLE.to_string(),
    );

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_max_title_length_over_max_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _length = EnvGuard::set(
        "OSPO_VALIDATION_MAX_TITLE_LENGTH",
        &ABOVE_MAX_TITLE.to_string(),
    );

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_min_above_max_title_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _min = EnvGuard::set("OSPO_VALIDATION_MIN_TITLE_LENGTH", "50");
    let _max = EnvGuard::set("OSPO_VALIDATION_MAX_TITLE_LENGTH", "40");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_zero_project_name_length_when_validate_then_error() {
    let _temp = setup_config_dir();
    let _length = EnvGuard::set(
        "OSPO_VALIDATION_MIN_PROJECT_NAME_LENGTH",
        &BELOW_MIN_PROJECT_NAME.to_string(),
    );

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_custom_title_bounds_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _min = EnvGuard::set("OSPO_VALIDATION_MIN_TITLE_LENGTH", "5");
    let _max = EnvGuard::set("OSPO_VALIDATION_MAX_TITLE_LENGTH", "200");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validation.min_title_length, eq(5));
    assert_that!(config.validation.max_title_length, eq(200));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_default_validation_config_then_matches_core_limits() {
    let config = ValidationConfig::default();
    let limits = ValidationLimits::default();

    assert_that!(config.min_title_length, eq(limits.min_title_length));
    assert_that!(config.max_title_length, eq(limits.max_title_length));
    assert_that!(config.min_project_name_length, eq(limits.min_project_name_length));
}
