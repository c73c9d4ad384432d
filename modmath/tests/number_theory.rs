use modmath::modulo::{
    mul_modulo_lazy, reduce_mod, AddModulo, InvModulo, Modulo, Modulus, MulModulo,
    MulModuloFactor, PowModulo, SubModulo, TryInvModulo,
};
use modmath::number_theory::{
    generate_primes, is_prime, is_primitive_root, minimal_primitive_root, PrimeGenerator,
    SearchOrder,
};
use modmath::{add_u64, divide_u128_u64_lo, ArithError, is_power_of_two, log2, maximum_value, msb, set_bit};
use proptest::prelude::*;

const M61: u64 = 2305843009211596801;

#[test]
fn test_log2() {
    for i in 0..14 {
        assert_eq!(log2(1u64 << i), i);
    }
}

#[test]
fn test_msb() {
    assert_eq!(msb(2305843009213689601u64), 60);
    assert_eq!(msb(1152921504606844417u64), 59);
    assert_eq!(msb(1152921504606844289u64), 59);
    assert_eq!(msb((1u64 << 40) + 1), 40);
    assert_eq!(msb(1u64 << 40), 40);
    assert_eq!(msb((1u64 << 40) - 1), 39);
    assert_eq!(msb(256u64), 8);
    assert_eq!(msb(1u64), 0);
}

#[test]
fn test_is_power_of_two() {
    for x in [1u64, 2, 4, 8, 16, 32, 512, 1024, 2048, 4096, 16384, 32768] {
        assert!(is_power_of_two(x));
    }
    for x in [0u64, 3, 5, 7, 9, 31, 33, 1025, 4095] {
        assert!(!is_power_of_two(x));
    }
}

#[test]
fn test_set_bit() {
    for i in 0..4 {
        assert_eq!(set_bit(0b0000u64, i, true), 1 << i);
        assert_eq!(set_bit(0b1111u64, i, false), 0b1111 ^ (1 << i));
    }
}

#[test]
fn test_maximum_value() {
    assert_eq!(maximum_value(64), u64::MAX);
    assert_eq!(maximum_value(52), 0xfffffffffffff);
    assert_eq!(maximum_value(0), 0);
}

#[test]
fn test_add_u64() {
    assert_eq!(add_u64(1, 0), (1, false));
    assert_eq!(add_u64(1, 1), (2, false));
    assert_eq!(add_u64(10, 7), (17, false));
    assert_eq!(add_u64(1 << 32, 1 << 16), (4295032832, false));
    assert_eq!(add_u64(1 << 63, 1 << 63), (0, true));
    assert_eq!(add_u64((1 << 63) + 1, 1 << 63), (1, true));
    assert_eq!(add_u64((1 << 63) + 13, (1 << 63) + 17), (30, true));
}

#[test]
fn test_divide_u128_u64_lo() {
    assert_eq!(divide_u128_u64_lo(0, 0, 2), 0);
    assert_eq!(divide_u128_u64_lo(0, 4294908658, 454), 9460151);
    assert_eq!(divide_u128_u64_lo(0, 4294908658, 429490865), 10);
    assert_eq!(divide_u128_u64_lo(0, u64::MAX, 1), u64::MAX);
    assert_eq!(divide_u128_u64_lo(0, 0xfffffff, 0xfffffff), 1);
    assert_eq!(divide_u128_u64_lo(4294908658, u64::MAX, u64::MAX), 4294908659);
}

#[test]
fn test_add_sub_modulo() {
    assert_eq!(1u64.add_modulo(0, 2), 1);
    assert_eq!(1u64.add_modulo(1, 2), 0);
    assert_eq!(3u64.add_modulo(7, 10), 0);
    assert_eq!(6u64.add_modulo(6, 10), 2);

    let m = 1u64 << 63;
    assert_eq!(3u64.add_modulo(7, m), 10);
    assert_eq!((m - 1).add_modulo(1, m), 0);
    assert_eq!((m - 1).add_modulo(2, m), 1);
    assert_eq!((m - 1).add_modulo(m - 3, m), m - 4);

    assert_eq!(0u64.sub_modulo(1, 2), 1);
    assert_eq!(3u64.sub_modulo(7, 10), 6);
    assert_eq!(4u64.sub_modulo(6, 10), 8);
    assert_eq!(6u64.sub_modulo(6, 10), 0);
    assert_eq!(3u64.sub_modulo(7, m), m - 4);
    assert_eq!((m - 1).sub_modulo(1, m), m - 2);
    assert_eq!(2u64.sub_modulo(m - 1, m), 3);
    assert_eq!((m - 1).sub_modulo(m - 3, m), 2);
}

#[test]
fn test_mul_modulo() {
    let cases = [
        (2, 1, 1, 1),
        (10, 7, 7, 9),
        (10, 6, 7, 2),
        (10, 7, 6, 2),
        (M61, 0, 1, 0),
        (M61, 1152921504605798400, 1152921504605798401, 576460752302899200),
        (M61, 1152921504605798401, 1152921504605798400, 576460752302899200),
        (M61, 1152921504605798401, 1152921504605798401, 1729382256908697601),
        (M61, M61 - 1, M61 - 1, 1),
    ];

    for (m, x, y, expected) in cases {
        let factor = <MulModuloFactor>::new(y, m);
        let modulus = Modulus::new(m);
        assert_eq!(x.mul_modulo(y, m), expected);
        assert_eq!(x.mul_modulo(factor, m), expected);
        assert_eq!(x.mul_modulo(y, &modulus), expected);
    }
}

#[test]
fn test_mul_modulo_lazy() {
    assert_eq!(mul_modulo_lazy::<64>(M61 - 1, M61 - 1, M61), M61 + 1);
    assert_eq!(reduce_mod::<2>(M61 + 1, M61), 1);

    assert_eq!(mul_modulo_lazy::<52>(7, 7, 10), 9);
    assert_eq!(mul_modulo_lazy::<52>(7, 6, 10), 2);
}

#[cfg(any(debug_assertions, feature = "checked"))]
#[test]
#[should_panic]
fn test_mul_modulo_lazy_52_rejects_wide_operand() {
    let _ = mul_modulo_lazy::<52>(1 << 52, 7, 10);
}

#[cfg(any(debug_assertions, feature = "checked"))]
#[test]
#[should_panic]
fn test_mul_modulo_lazy_52_rejects_unreduced_factor() {
    let _ = mul_modulo_lazy::<52>(7, 11, 10);
}

#[cfg(any(debug_assertions, feature = "checked"))]
#[test]
#[should_panic]
fn test_mul_modulo_lazy_52_rejects_wide_modulus() {
    let _ = mul_modulo_lazy::<52>(1, 1, 1 << 52);
}

#[test]
fn test_pow_modulo() {
    assert_eq!(1u64.pow_modulo(0, 5), 1);
    assert_eq!(1u64.pow_modulo(u64::MAX, 5), 1);
    assert_eq!(2u64.pow_modulo(u64::MAX, 5), 3);
    assert_eq!(2u64.pow_modulo(60, 1 << 60), 0);
    assert_eq!(2u64.pow_modulo(59, 1 << 60), 0x800000000000000);
    assert_eq!(2424242424u64.pow_modulo(16, 131313131313), 39418477653);
    assert_eq!(
        2424242424u64.pow_modulo(16, &Modulus::new(131313131313)),
        39418477653
    );
}

#[test]
fn test_inv_modulo() {
    assert_eq!(1u64.inv_modulo(2), 1);
    assert_eq!(3u64.inv_modulo(2), 1);
    assert_eq!(0xFFFFFFu64.inv_modulo(2), 1);
    assert_eq!(5u64.inv_modulo(19), 4);
    assert_eq!(4u64.inv_modulo(19), 5);

    assert!(2u64.try_inv_modulo(2).is_err());
    assert!(0xFFFFFEu64.try_inv_modulo(2).is_err());
    assert!(12345u64.try_inv_modulo(3).is_err());
    assert_eq!(5u64.try_inv_modulo(0), Err(ArithError::InvalidModulus(0)));
}

#[cfg(any(debug_assertions, feature = "checked"))]
#[test]
#[should_panic]
fn test_inv_modulo_rejects_zero_modulus() {
    let _ = 6u64.inv_modulo(0);
}

#[cfg(any(debug_assertions, feature = "checked"))]
#[test]
#[should_panic]
fn test_inv_modulo_rejects_non_coprime() {
    let _ = 12345u64.inv_modulo(3);
}

#[test]
fn test_is_prime() {
    for p in [
        2,
        3,
        5,
        M61,
        36893488147419103,
        0xffffffffffc0001,
        0xffffee001,
    ] {
        assert!(is_prime(p), "{p}");
    }
    for n in [72307 * 59399, M61 + 1, 36893488147419107] {
        assert!(!is_prime(n), "{n}");
    }
}

#[test]
fn test_is_primitive_root() {
    assert!(is_primitive_root(10, 2, 11));
    assert!(!is_primitive_root(9, 2, 11));
    assert!(!is_primitive_root(10, 4, 11));

    assert!(is_primitive_root(28, 2, 29));
    assert!(is_primitive_root(12, 4, 29));
    assert!(!is_primitive_root(12, 2, 29));
    assert!(!is_primitive_root(12, 8, 29));

    let m = 1234565441;
    assert!(is_primitive_root(1234565440, 2, m));
    assert!(is_primitive_root(960907033, 8, m));
    assert!(is_primitive_root(1180581915, 16, m));
    assert!(!is_primitive_root(1180581915, 32, m));
    assert!(!is_primitive_root(1180581915, 8, m));
    assert!(!is_primitive_root(1180581915, 2, m));
}

#[cfg(any(debug_assertions, feature = "checked"))]
#[test]
#[should_panic]
fn test_is_primitive_root_rejects_non_power_of_two() {
    let _ = is_primitive_root(3, 6, 7);
}

#[test]
fn test_minimal_primitive_root() {
    assert_eq!(minimal_primitive_root(2, 11), Ok(10));
    assert_eq!(minimal_primitive_root(2, 29), Ok(28));
    assert_eq!(minimal_primitive_root(4, 29), Ok(12));
    assert_eq!(minimal_primitive_root(2, 1234565441), Ok(1234565440));
    assert_eq!(minimal_primitive_root(8, 1234565441), Ok(249725733));
    assert_eq!(
        minimal_primitive_root(1, 29),
        Err(ArithError::NoPrimitiveRoot {
            degree: 1,
            modulus: 29
        })
    );
}

#[test]
fn test_generate_primes() {
    let ntt_size = 4096;
    for bit_size in 40..=62 {
        let primes = generate_primes(10, bit_size, ntt_size).unwrap();
        assert_eq!(primes.len(), 10);
        for p in primes {
            assert_eq!(p % (2 * ntt_size), 1);
            assert!(p > (1 << bit_size));
            assert!(p < (1 << (bit_size + 1)));
            assert!(is_prime(p));
        }
    }
}

#[test]
fn test_generated_primes_have_roots() {
    let primes = PrimeGenerator::new(50, 1024)
        .unwrap()
        .order(SearchOrder::Ascending)
        .generate(3)
        .unwrap();
    for q in primes {
        let root = minimal_primitive_root(2048, q).unwrap();
        assert!(is_primitive_root(root, 2048, q));
        assert_eq!(root.pow_modulo(2048, q), 1);
    }
}

proptest! {
    #[test]
    fn prop_factor_matches_plain(m in 2u64..(1 << 63), x: u64, y: u64) {
        let (x, y) = (x % m, y % m);
        let factor = <MulModuloFactor>::new(y, m);
        prop_assert_eq!(x.mul_modulo(factor, m), x.mul_modulo(y, m));
    }

    #[test]
    fn prop_factor_52_matches_plain(m in 2u64..(1 << 52), x in 0u64..(1 << 52), y: u64) {
        let y = y % m;
        let factor = MulModuloFactor::<52>::new(y, m);
        prop_assert_eq!(x.mul_modulo(factor, m), x.mul_modulo(y, m));
    }

    #[test]
    fn prop_barrett_modulus_matches_plain(m in 2u64..(1 << 63), lo: u64, hi: u64) {
        let modulus = Modulus::new(m);
        let v = ((hi as u128) << 64) | lo as u128;
        prop_assert_eq!([lo, hi].modulo(&modulus), (v % m as u128) as u64);
    }

    #[test]
    fn prop_inverse_law(x in 1u64..M61) {
        prop_assert_eq!(x.mul_modulo(x.inv_modulo(M61), M61), 1);
    }

    #[test]
    fn prop_pow_additive(x: u64, a in 0u64..(1 << 32), b in 0u64..(1 << 32), m in 2u64..=u64::MAX) {
        let lhs = x.pow_modulo(a + b, m);
        let rhs = x.pow_modulo(a, m).mul_modulo(x.pow_modulo(b, m), m);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn prop_pow_zero_is_one(x: u64, m in 1u64..=u64::MAX) {
        prop_assert_eq!(x.pow_modulo(0, m), 1);
    }
}
