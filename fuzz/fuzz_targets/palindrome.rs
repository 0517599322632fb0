#![no_main]

use libfuzzer_sys::fuzz_target;

use edu_utils::srel::is_palindrome;

fuzz_target!(|data: &[u8]| {
    if let Ok(word) = std::str::from_utf8(data) {
        let reversed: String = word.chars().rev().collect();
        assert_eq!(is_palindrome(word), is_palindrome(&reversed));

        let mirrored: String = word.chars().chain(word.chars().rev()).collect();
        assert!(is_palindrome(&mirrored));
    }
});
