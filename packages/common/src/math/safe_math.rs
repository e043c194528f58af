use core::panic::Location;

use soroban_sdk::{log, Env};

use crate::error::{ErrorCode, LenderResult};

pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self, env: &Env) -> LenderResult<Self>;
    fn safe_sub(self, rhs: Self, env: &Env) -> LenderResult<Self>;
    fn safe_mul(self, rhs: Self, env: &Env) -> LenderResult<Self>;
    fn safe_div(self, rhs: Self, env: &Env) -> LenderResult<Self>;
}

/// Maps an overflowing checked operation to `MathError`, logging the caller's
/// location.
#[track_caller]
fn or_math_error<T>(env: &Env, result: Option<T>) -> LenderResult<T> {
    match result {
        Some(value) => Ok(value),
        None => {
            let location = Location::caller();
            log!(env, "Math error thrown at {}:{}", location.file(), location.line());
            Err(ErrorCode::MathError)
        }
    }
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            #[track_caller]
            fn safe_add(self, v: $t, env: &Env) -> LenderResult<$t> {
                or_math_error(env, self.checked_add(v))
            }

            #[track_caller]
            fn safe_sub(self, v: $t, env: &Env) -> LenderResult<$t> {
                or_math_error(env, self.checked_sub(v))
            }

            #[track_caller]
            fn safe_mul(self, v: $t, env: &Env) -> LenderResult<$t> {
                or_math_error(env, self.checked_mul(v))
            }

            #[track_caller]
            fn safe_div(self, v: $t, env: &Env) -> LenderResult<$t> {
                or_math_error(env, self.checked_div(v))
            }
        }
    };
}

checked_impl!(u64);
checked_impl!(u32);
checked_impl!(i128);
