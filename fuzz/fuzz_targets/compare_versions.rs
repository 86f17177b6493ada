#![no_main]

use libfuzzer_sys::fuzz_target;
use vercmp_maven::{Version, compare};

fuzz_target!(|data: (&str, &str)| {
    let (a, b) = data;
    let left = Version::new(a);
    let right = Version::new(b);

    assert_eq!(left.as_str(), a);
    assert_eq!(compare(&left, &left), std::cmp::Ordering::Equal);
    assert_eq!(left, left.clone());
    assert_eq!(left == right, right == left);
    assert_eq!(
        left.partial_cmp(&right),
        right.partial_cmp(&left).map(std::cmp::Ordering::reverse)
    );
    let _ = vercmp::vercmp(a, b);
});
