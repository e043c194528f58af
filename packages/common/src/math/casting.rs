use soroban_sdk::{log, Env};

use crate::error::{ErrorCode, LenderResult};

pub trait Cast: Sized {
    /// Perform a casting operation with error handling.
    #[track_caller]
    #[inline(always)]
    fn cast<T: CastFrom<Self>>(self, env: &Env) -> LenderResult<T> {
        T::cast_from(self, env)
    }
}

pub trait CastFrom<T>: Sized {
    fn cast_from(value: T, env: &Env) -> LenderResult<Self>;
}

macro_rules! impl_cast {
    ($src:ty, $dst:ty) => {
        impl CastFrom<$src> for $dst {
            fn cast_from(value: $src, env: &Env) -> LenderResult<Self> {
                value.try_into().map_err(|_| {
                    log!(
                        env,
                        "Casting error: Failed to cast {} to {}",
                        stringify!($src),
                        stringify!($dst)
                    );
                    ErrorCode::CastingFailure
                })
            }
        }
    };
}

impl_cast!(u64, i128);
impl_cast!(u32, i128);
impl_cast!(i128, u64);
impl_cast!(i128, u32);

impl Cast for u64 {}
impl Cast for u32 {}
impl Cast for i128 {}
