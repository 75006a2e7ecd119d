use crate::models::BmiCategory;

pub const UNDERWEIGHT_BELOW: f64 = 18.5;
pub const OVERWEIGHT_FROM: f64 = 25.0;
pub const OBESE_FROM: f64 = 30.0;

/// Standard adult cutoffs. A boundary value belongs to the higher category,
/// so 18.5 is Normal and 30.0 is Obese. Non-positive or non-finite input has
/// no category.
pub fn classify(bmi: f64) -> BmiCategory {
    if !bmi.is_finite() || bmi <= 0.0 {
        return BmiCategory::Unclassified;
    }

    if bmi < UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi < OVERWEIGHT_FROM {
        BmiCategory::Normal
    } else if bmi < OBESE_FROM {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}
