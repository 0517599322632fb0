#![no_main]

use libfuzzer_sys::fuzz_target;

use edu_utils::algo;
use edu_utils::selection::swap_once;

use edu_utils_fuzz::u8_as_i32;

fuzz_target!(|data: &[u8]| {
    let v = u8_as_i32(data);

    let mut expected = v.clone();
    expected.sort();

    let mut in_place = v.clone();
    swap_once::sort(&mut in_place);
    assert_eq!(in_place, expected);

    assert_eq!(algo::min(&v).ok(), expected.first());
    assert_eq!(algo::max(&v).ok(), expected.last());

    assert_eq!(algo::sel_sort(v), expected);
});
