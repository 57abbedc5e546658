use crate::math::Real;

pub(crate) const ONE_SIXTH: Real = 1.0 / 6.0;
pub(crate) const ONE_THIRD: Real = 1.0 / 3.0;
