mod strings;

pub use strings::{
    apply_mask, clean_alphanumeric, clean_digits, has_letter, is_all_digits, is_repeated_sequence,
};
