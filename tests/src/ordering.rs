use addrsort_core::{compare_address, compare_ip, sort_addresses, sort_ips};

use crate::support::count_warnings;

/// Checks that both comparators and both pure sorting helpers agree on an all-address input.
fn assert_sorted(input: &[&str], expected: &[&str]) {
    let mut by_ip: Vec<&str> = input.to_vec();
    by_ip.sort_by(|a, b| compare_ip(a, b));
    assert_eq!(by_ip, expected, "compare_ip");

    let mut by_address: Vec<&str> = input.to_vec();
    by_address.sort_by(|a, b| compare_address(a, b));
    assert_eq!(by_address, expected, "compare_address");

    assert_eq!(sort_ips(input), expected, "sort_ips");
    assert_eq!(sort_addresses(input), expected, "sort_addresses");
}

#[test]
fn ipv4_one_octet_differs() {
    assert_sorted(
        &["127.0.2.0", "127.0.3.0", "127.0.1.0"],
        &["127.0.1.0", "127.0.2.0", "127.0.3.0"],
    );
}

#[test]
fn ipv4_few_octets_differ() {
    assert_sorted(
        &[
            "192.168.11.10",
            "192.168.10.0",
            "192.168.11.11",
            "192.168.10.10",
            "192.168.1.10",
            "192.168.0.1",
            "192.168.1.0",
            "192.168.1.1",
            "192.168.11.0",
            "192.168.0.10",
            "192.168.10.11",
            "192.168.0.11",
            "192.168.1.11",
            "192.168.0.0",
            "192.168.10.1",
            "192.168.11.1",
        ],
        &[
            "192.168.0.0",
            "192.168.0.1",
            "192.168.0.10",
            "192.168.0.11",
            "192.168.1.0",
            "192.168.1.1",
            "192.168.1.10",
            "192.168.1.11",
            "192.168.10.0",
            "192.168.10.1",
            "192.168.10.10",
            "192.168.10.11",
            "192.168.11.0",
            "192.168.11.1",
            "192.168.11.10",
            "192.168.11.11",
        ],
    );

    // A string sort would put .100 before .2
    assert_sorted(
        &[
            "192.168.2.11",
            "192.168.3.1",
            "192.168.2.100",
            "192.168.2.2",
            "192.168.2.1",
            "192.168.2.10",
            "192.168.2.99",
            "192.168.2.200",
            "192.168.2.199",
        ],
        &[
            "192.168.2.1",
            "192.168.2.2",
            "192.168.2.10",
            "192.168.2.11",
            "192.168.2.99",
            "192.168.2.100",
            "192.168.2.199",
            "192.168.2.200",
            "192.168.3.1",
        ],
    );
}

#[test]
fn ipv6_long_form() {
    assert_sorted(
        &[
            "2001:db8:11a3:9d7:0:0:0:2",
            "2001:db8:11a3:9d7:0:0:0:3",
            "2001:db8:11a3:9d7:0:0:0:1",
        ],
        &[
            "2001:db8:11a3:9d7:0:0:0:1",
            "2001:db8:11a3:9d7:0:0:0:2",
            "2001:db8:11a3:9d7:0:0:0:3",
        ],
    );
}

#[test]
fn ipv6_short_form() {
    assert_sorted(
        &["2001:db8::", "2001:db7::", "2001:db9::"],
        &["2001:db7::", "2001:db8::", "2001:db9::"],
    );
}

#[test]
fn ipv6_long_and_short_forms() {
    assert_sorted(
        &[
            "2001:db8::",
            "2001:db7:11a3:9d7:0:0:0:2",
            "2001:db6:11a3:9d7:0:0:0:1",
            "2001:db6::",
            "2001:db7:11a3:9d7:0:0:0:1",
            "2001:db7::",
        ],
        &[
            "2001:db6::",
            "2001:db6:11a3:9d7:0:0:0:1",
            "2001:db7::",
            "2001:db7:11a3:9d7:0:0:0:1",
            "2001:db7:11a3:9d7:0:0:0:2",
            "2001:db8::",
        ],
    );
}

#[test]
fn ipv4_and_ipv6_mixed_forms() {
    assert_sorted(
        &[
            "2001:db8:11a3:9d7::1",
            "127.0.0.3",
            "2001:db8:11a3:9d7:0:0:0:2",
            "127.0.0.1",
            "2001:db8:11a3:9d7::3",
            "127.0.0.2",
        ],
        &[
            "127.0.0.1",
            "127.0.0.2",
            "127.0.0.3",
            "2001:db8:11a3:9d7::1",
            "2001:db8:11a3:9d7:0:0:0:2",
            "2001:db8:11a3:9d7::3",
        ],
    );
}

#[test]
fn ipv4_always_before_ipv6() {
    assert_sorted(&["::1", "0.0.0.1"], &["0.0.0.1", "::1"]);

    assert_sorted(
        &[
            "::1",
            "0.0.0.2",
            "127.0.0.1",
            "::2",
            "2001:db8:11a3:9d7:0:0:0:2",
            "0.0.0.1",
            "2001:db8:11a3:9d7::1",
        ],
        &[
            "0.0.0.1",
            "0.0.0.2",
            "127.0.0.1",
            "::1",
            "::2",
            "2001:db8:11a3:9d7::1",
            "2001:db8:11a3:9d7:0:0:0:2",
        ],
    );
}

#[test]
fn cidr_ipv4_before_plain_address() {
    assert_sorted(
        &["192.168.0.1/9", "192.168.0.1/7", "192.168.0.1/8"],
        &["192.168.0.1/7", "192.168.0.1/8", "192.168.0.1/9"],
    );

    assert_sorted(
        &["192.168.0.1/9", "192.168.0.1", "192.168.0.1/32", "192.168.0.1/7", "192.168.0.1/8"],
        &["192.168.0.1/7", "192.168.0.1/8", "192.168.0.1/9", "192.168.0.1/32", "192.168.0.1"],
    );
}

#[test]
fn cidr_ipv6_before_plain_address() {
    assert_sorted(
        &[
            "2001:db8:11a3:9d7::1/32",
            "2001:db8:11a3:9d7::1",
            "2001:db8:11a3:9d7::1/64",
            "2001:db8:11a3:9d7::1/128",
            "2001:db8:11a3:9d7::1/24",
        ],
        &[
            "2001:db8:11a3:9d7::1/24",
            "2001:db8:11a3:9d7::1/32",
            "2001:db8:11a3:9d7::1/64",
            "2001:db8:11a3:9d7::1/128",
            "2001:db8:11a3:9d7::1",
        ],
    );
}

const MIXED_INPUT: [&str; 21] = [
    "2001:db8:11a3:9d7:0:0:0:1/32",
    "192.168.1.2",
    "127.0.0.2",
    "2001:db8:11a3:9d7::1/128",
    "2001:db8:11a3:9d7:0:0:0:1",
    "127.0.0.1/12",
    "192.168.1.1",
    "2001:db8::/32",
    "2001:db8:11a3:9d7::1/24",
    "192.168.1.2/12",
    "2001:db7::/32",
    "127.0.0.1",
    "2001:db8:11a3:9d7:0:0:0:2",
    "192.168.1.1/24",
    "2001:db7::/64",
    "2001:db7::",
    "2001:db8::",
    "2001:db8:11a3:9d7:0:0:0:1/128",
    "192.168.1.1/12",
    "127.0.0.1/32",
    "::1",
];

const MIXED_SORTED: [&str; 21] = [
    "127.0.0.1/12",
    "127.0.0.1/32",
    "127.0.0.1",
    "127.0.0.2",
    "192.168.1.1/12",
    "192.168.1.1/24",
    "192.168.1.1",
    "192.168.1.2/12",
    "192.168.1.2",
    "::1",
    "2001:db7::/32",
    "2001:db7::/64",
    "2001:db7::",
    "2001:db8::/32",
    "2001:db8::",
    "2001:db8:11a3:9d7::1/24",
    "2001:db8:11a3:9d7:0:0:0:1/32",
    // Equal entries keep their input order
    "2001:db8:11a3:9d7::1/128",
    "2001:db8:11a3:9d7:0:0:0:1/128",
    "2001:db8:11a3:9d7:0:0:0:1",
    "2001:db8:11a3:9d7:0:0:0:2",
];

#[test]
fn mixed_families_forms_and_cidr() {
    assert_sorted(&MIXED_INPUT, &MIXED_SORTED);
}

#[test]
fn equivalent_ipv6_forms_compare_equal_without_warning() {
    let (ordering, warnings) = count_warnings(|| compare_ip("2001:db8::1", "2001:db8:0:0:0:0:0:1"));
    assert_eq!(ordering, std::cmp::Ordering::Equal);
    assert_eq!(warnings, 0);
}

fn assert_unchanged_with_warning(input: &[&str]) {
    let (sorted, warnings) = count_warnings(|| {
        let mut sorted: Vec<&str> = input.to_vec();
        sorted.sort_by(|a, b| compare_ip(a, b));
        sorted
    });
    assert_eq!(sorted, input);
    assert!(warnings > 0, "expected a warning for {input:?}");

    let (sorted, warnings) = count_warnings(|| sort_ips(input));
    assert_eq!(sorted, input);
    assert!(warnings > 0, "expected a warning for {input:?}");
}

#[test]
fn invalid_strings_stay_in_place() {
    assert_unchanged_with_warning(&["invalid ip", "invalid cidr"]);
}

#[test]
fn invalid_ip_stays_in_place() {
    assert_unchanged_with_warning(&["127.0.0.2.", ".127.0.0.1.", ".2001:db8:11a3:9d7:0:0:0:0"]);
}

#[test]
fn invalid_cidr_stays_in_place() {
    assert_unchanged_with_warning(&["127.0.0.2/33", "2001:db8:11a3:9d7:0:0:0:0/129"]);
}

#[test]
fn valid_and_invalid_ip_stay_in_place() {
    assert_unchanged_with_warning(&["127.0.0.4.", "127.0.0.1", ".127.0.0.3", "127.0.0.2"]);
}

#[test]
fn hostnames_only() {
    let input = [
        "fritz.box",
        "adguard-home.fritz.box",
        "foo.bar",
        "example.com",
        "my.router.local",
        "office.lan",
        "server.example.org",
        "mail.google.com",
        "desktop.home",
        "printer.office.lan",
        "web.internal",
        "host123.domain.net",
        "api.service.company",
    ];
    let expected = [
        "adguard-home.fritz.box",
        "api.service.company",
        "desktop.home",
        "example.com",
        "foo.bar",
        "fritz.box",
        "host123.domain.net",
        "mail.google.com",
        "my.router.local",
        "office.lan",
        "printer.office.lan",
        "server.example.org",
        "web.internal",
    ];

    let (sorted, warnings) = count_warnings(|| {
        let mut sorted: Vec<&str> = input.to_vec();
        sorted.sort_by(|a, b| compare_address(a, b));
        sorted
    });
    assert_eq!(sorted, expected);
    assert_eq!(warnings, 0);
    assert_eq!(sort_addresses(&input), expected);
}

#[test]
fn addresses_before_hostnames() {
    let mut input: Vec<&str> = MIXED_INPUT.to_vec();
    input.insert(3, "foo.bar");
    input.insert(8, "fritz.box");
    input.insert(9, "adguard-home.fritz.box");
    input.push("*.home.fritz.net");

    let mut expected: Vec<&str> = MIXED_SORTED.to_vec();
    expected.extend(["*.home.fritz.net", "adguard-home.fritz.box", "foo.bar", "fritz.box"]);

    let (sorted, warnings) = count_warnings(|| {
        let mut sorted: Vec<&str> = input.clone();
        sorted.sort_by(|a, b| compare_address(a, b));
        sorted
    });
    assert_eq!(sorted, expected);
    assert_eq!(warnings, 0);
    assert_eq!(sort_addresses(&input), expected);
}
