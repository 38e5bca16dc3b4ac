pub mod invariants;
pub mod validation;

pub use validation::{
    clamp_position, has_duplicate_name, is_valid_name, validate_forest, validate_name,
    DEFAULT_MAX_DEPTH, MAX_NAME_LEN, MIN_NAME_LEN,
};
