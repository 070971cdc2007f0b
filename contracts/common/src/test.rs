use crate::*;

mod percent {
    use super::*;

    #[test]
    fn mul_int() {
        assert_eq!(Percent::new(5).mul_int(100).unwrap(), 5);
        assert_eq!(Percent::new(5).mul_int(10_500).unwrap(), 525);
        assert_eq!(Percent::HUNDRED.mul_int(77).unwrap(), 77);
    }

    #[test]
    fn mul_int_rounds_down() {
        assert_eq!(Percent::new(5).mul_int(19).unwrap(), 0);
        assert_eq!(Percent::new(5).mul_int(105).unwrap(), 5);
        assert_eq!(Percent::new(5).mul_int(39).unwrap(), 1);
    }

    #[test]
    fn recip_mul_int() {
        assert_eq!(Percent::new(150).recip_mul_int(150).unwrap(), 100);
        assert_eq!(Percent::new(150).recip_mul_int(151).unwrap(), 100);
        assert_eq!(Percent::new(150).recip_mul_int(149).unwrap(), 99);
        assert_eq!(Percent::new(150).recip_mul_int(1).unwrap(), 0);
    }

    #[test]
    fn recip_mul_int_by_zero() {
        assert!(Percent::ZERO.recip_mul_int(100).is_none());
    }

    #[test]
    fn ratio() {
        assert_eq!(Percent::ratio(150, 100).unwrap(), 150);
        assert_eq!(Percent::ratio(150, 105).unwrap(), 142);
        assert_eq!(Percent::ratio(1, 3).unwrap(), 33);
        assert!(Percent::ratio(1, 0).is_none());
    }

    #[test]
    fn into_inner() {
        assert_eq!(Percent::new(42).into_inner(), 42);
        assert!(Percent::ZERO.is_zero());
        assert!(!Percent::HUNDRED.is_zero());
    }
}

mod limits {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(COLLATERAL_RATIO.into_inner(), 150);
        assert_eq!(INTEREST_RATE.into_inner(), 5);
        assert_eq!(PERIOD_LENGTH, 7 * 24 * 60 * 60);
    }

    #[test]
    fn max_debt_floors() {
        assert_eq!(max_debt(0).unwrap(), 0);
        assert_eq!(max_debt(150).unwrap(), 100);
        assert_eq!(max_debt(299).unwrap(), 199);
        assert_eq!(max_debt(300).unwrap(), 200);
    }

    #[test]
    fn collateralization_without_debt_is_infinite() {
        assert_eq!(collateralization(150, 0).unwrap(), INFINITE_COLLATERALIZATION);
        assert_eq!(collateralization(0, 0).unwrap(), INFINITE_COLLATERALIZATION);
    }

    #[test]
    fn collateralization_with_debt() {
        assert_eq!(collateralization(150, 100).unwrap(), 150);
        assert_eq!(collateralization(150, 105).unwrap(), 142);
        assert_eq!(collateralization(0, 10).unwrap(), 0);
    }
}
