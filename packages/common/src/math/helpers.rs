use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{log, Env};

use crate::error::{ErrorCode, LenderResult};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rounding {
    Floor,
    Ceil,
}

/// `value * numerator / denominator` with explicit rounding.
pub fn mul_div(
    env: &Env,
    value: i128,
    numerator: i128,
    denominator: i128,
    rounding: Rounding,
) -> LenderResult<i128> {
    if denominator == 0 {
        log!(env, "Math error: division by zero thrown at {}:{}", file!(), line!());
        return Err(ErrorCode::MathError);
    }

    let result = match rounding {
        Rounding::Floor => value.fixed_mul_floor(numerator, denominator),
        Rounding::Ceil => value.fixed_mul_ceil(numerator, denominator),
    };

    result.ok_or_else(|| {
        log!(env, "Math error thrown at {}:{}", file!(), line!());
        ErrorCode::MathError
    })
}

/// Portion of `value` expressed in basis points, rounded down.
pub fn get_bps_portion(env: &Env, value: i128, bps: u32) -> LenderResult<i128> {
    mul_div(
        env,
        value,
        bps as i128,
        crate::constants::MAX_BPS_I128,
        Rounding::Floor,
    )
}
