mod quantity;

pub use quantity::{
    CANONICAL_BATCH_LBS, GRAMS_PER_LB, ScaledLine, format_qty, lbs_to_display, scale_quantity,
    scaled_lines, smart_round,
};
