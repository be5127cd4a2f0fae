use crate::scheduling::{CustomBusinessDay, CustomBusinessMonth};
use auto_ops::{impl_op, impl_op_ex_commutative};

impl_op!(-|a: CustomBusinessMonth| -> CustomBusinessMonth { a.negate() });
impl_op!(-|a: &CustomBusinessMonth| -> CustomBusinessMonth { a.negate() });
impl_op_ex_commutative!(*|a: &CustomBusinessMonth, b: &i32| -> CustomBusinessMonth {
    a.scale(*b)
});

impl_op!(-|a: CustomBusinessDay| -> CustomBusinessDay { a.negate() });
impl_op!(-|a: &CustomBusinessDay| -> CustomBusinessDay { a.negate() });
impl_op_ex_commutative!(*|a: &CustomBusinessDay, b: &i32| -> CustomBusinessDay {
    a.scale(*b)
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::{ndt, Cal};

    #[test]
    fn negate_month() {
        let offset = CustomBusinessMonth::begin(2);
        assert_eq!(-&offset, CustomBusinessMonth::begin(-2));
        assert_eq!(-offset, CustomBusinessMonth::begin(-2));
    }

    #[test]
    fn mul_month() {
        let offset = CustomBusinessMonth::end(1);
        assert_eq!(&offset * 6, CustomBusinessMonth::end(6));
        assert_eq!(-6 * &offset, CustomBusinessMonth::end(-6));
        assert_eq!(offset * -6, CustomBusinessMonth::end(-6));
    }

    #[test]
    fn mul_month_apply() {
        let offset = CustomBusinessMonth::begin(1) * 6;
        assert_eq!(offset.apply(&ndt(2011, 12, 18)).unwrap(), ndt(2012, 6, 1));
        assert_eq!((-offset).apply(&ndt(2012, 1, 1)).unwrap(), ndt(2011, 7, 1));
    }

    #[test]
    fn negate_and_mul_day() {
        let cday = CustomBusinessDay::new(3, Cal::default());
        assert_eq!((-&cday).n(), -3);
        assert_eq!((2 * &cday).n(), 6);
        assert_eq!((cday * 0).n(), 0);
    }
}
