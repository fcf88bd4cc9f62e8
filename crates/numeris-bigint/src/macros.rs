//! Operator forwarding.
//!
//! Each arithmetic operator has one real implementation; these macros
//! derive the owned/borrowed operand combinations from it.

/// Derives `Op` for every operand combination from `OpAssign<&BigUint>`.
macro_rules! forward_ops_via_assign {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign:ident) => {
        impl $assign_imp<BigUint> for BigUint {
            fn $assign(&mut self, rhs: BigUint) {
                $assign_imp::$assign(self, &rhs);
            }
        }

        impl $imp<&BigUint> for BigUint {
            type Output = BigUint;

            fn $method(mut self, rhs: &BigUint) -> BigUint {
                $assign_imp::$assign(&mut self, rhs);
                self
            }
        }

        impl $imp<BigUint> for BigUint {
            type Output = BigUint;

            fn $method(mut self, rhs: BigUint) -> BigUint {
                $assign_imp::$assign(&mut self, &rhs);
                self
            }
        }

        impl $imp<&BigUint> for &BigUint {
            type Output = BigUint;

            fn $method(self, rhs: &BigUint) -> BigUint {
                let mut result = self.clone();
                $assign_imp::$assign(&mut result, rhs);
                result
            }
        }

        impl $imp<BigUint> for &BigUint {
            type Output = BigUint;

            fn $method(self, rhs: BigUint) -> BigUint {
                let mut result = self.clone();
                $assign_imp::$assign(&mut result, &rhs);
                result
            }
        }
    };
}

/// Derives the remaining operand combinations and `OpAssign` from
/// `impl Op<&BigUint> for &BigUint`.
macro_rules! forward_ops_via_ref {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign:ident) => {
        impl $imp<BigUint> for BigUint {
            type Output = BigUint;

            fn $method(self, rhs: BigUint) -> BigUint {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&BigUint> for BigUint {
            type Output = BigUint;

            fn $method(self, rhs: &BigUint) -> BigUint {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<BigUint> for &BigUint {
            type Output = BigUint;

            fn $method(self, rhs: BigUint) -> BigUint {
                $imp::$method(self, &rhs)
            }
        }

        impl $assign_imp<&BigUint> for BigUint {
            fn $assign(&mut self, rhs: &BigUint) {
                *self = $imp::$method(&*self, rhs);
            }
        }

        impl $assign_imp<BigUint> for BigUint {
            fn $assign(&mut self, rhs: BigUint) {
                *self = $imp::$method(&*self, &rhs);
            }
        }
    };
}
