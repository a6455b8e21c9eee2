use linkscope_common::error::LinkError;
use linkscope_common::network::address::AddressFamily;
use linkscope_common::network::snapshot::LinkSnapshot;
use linkscope_core::summarize;

use crate::util::{dest, mistagged_v4, v4, v6, via};

/*************************************************************
                         Addresses
**************************************************************/

#[test]
fn no_ipv4_address_means_absent() {
    let snapshot = LinkSnapshot::new()
        .with_address(v6("2a02:908:8c1:b880::b054"))
        .with_address(v6("fe80::b3dd:5c39:7c29:48b6"));
    let summary = summarize(&snapshot).unwrap();
    assert_eq!(summary.ipv4_address, None);
}

#[test]
fn last_of_several_ipv4_addresses_is_shown() {
    let snapshot = LinkSnapshot::new()
        .with_address(v4(10, 0, 0, 1))
        .with_address(v4(10, 0, 0, 2))
        .with_address(v4(10, 0, 0, 3));
    let summary = summarize(&snapshot).unwrap();
    assert_eq!(summary.ipv4_address, Some(v4(10, 0, 0, 3)));
}

#[test]
fn ipv6_addresses_are_the_ordered_ipv6_subsequence() {
    let snapshot = LinkSnapshot::new()
        .with_address(v6("fe80::1"))
        .with_address(v4(192, 168, 0, 32))
        .with_address(v6("2a02:908:8c1:b880::b054"))
        .with_address(v6("fe80::1"));
    let summary = summarize(&snapshot).unwrap();
    assert_eq!(
        summary.ipv6_addresses,
        [v6("fe80::1"), v6("2a02:908:8c1:b880::b054"), v6("fe80::1")]
    );
}

/*************************************************************
                      Routes and DNS
**************************************************************/

#[test]
fn prefix_24_gives_class_c_mask() {
    let snapshot = LinkSnapshot::new().with_route(dest(v4(0, 0, 0, 0), 24));
    let summary = summarize(&snapshot).unwrap();
    assert_eq!(summary.subnet_mask, Some(v4(255, 255, 255, 0)));
    assert_eq!(summary.subnet_mask.unwrap().to_string(), "255.255.255.0");
}

#[test]
fn prefix_0_gives_no_mask() {
    let snapshot = LinkSnapshot::new().with_route(dest(v4(0, 0, 0, 0), 0));
    let summary = summarize(&snapshot).unwrap();
    assert_eq!(summary.subnet_mask, None);
}

#[test]
fn first_gateway_wins() {
    let snapshot = LinkSnapshot::new()
        .with_route(via(v4(192, 168, 1, 1)))
        .with_route(via(v4(192, 168, 1, 2)));
    let summary = summarize(&snapshot).unwrap();
    assert_eq!(summary.gateway, Some(v4(192, 168, 1, 1)));
}

#[test]
fn dns_text_skips_ipv6_servers() {
    let snapshot = LinkSnapshot::new()
        .with_dns_server(v6("2001:4860:4860::8888"))
        .with_dns_server(v4(8, 8, 8, 8))
        .with_dns_server(v4(8, 8, 4, 4));
    let summary = summarize(&snapshot).unwrap();
    assert_eq!(summary.dns_text, "8.8.8.8,8.8.4.4");
}

#[test]
fn no_dns_servers_gives_empty_text() {
    let summary = summarize(&LinkSnapshot::new()).unwrap();
    assert_eq!(summary.dns_text, "");
    assert_eq!(summary.dns(), None);
}

/*************************************************************
                    Purity and validation
**************************************************************/

#[test]
fn summarizing_twice_gives_equal_results() {
    let snapshot = LinkSnapshot::new()
        .with_interface("wlan0")
        .with_address(v4(192, 168, 1, 42))
        .with_address(v6("fe80::36cf:f6ff:fe9a:1122"))
        .with_route(dest(v4(192, 168, 1, 0), 24))
        .with_route(via(v4(192, 168, 1, 1)))
        .with_dns_server(v4(192, 168, 1, 1));
    let first = summarize(&snapshot).unwrap();
    let second = summarize(&snapshot).unwrap();
    assert_eq!(first, second);
}

#[test]
fn summaries_from_many_threads_agree() {
    let snapshot = LinkSnapshot::new()
        .with_address(v4(10, 96, 0, 57))
        .with_route(dest(v4(10, 96, 0, 0), 16));
    let expected = summarize(&snapshot).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let snapshot = snapshot.clone();
            std::thread::spawn(move || summarize(&snapshot).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn ipv4_tag_with_sixteen_bytes_is_invalid() {
    let snapshot = LinkSnapshot::new()
        .with_address(v4(192, 168, 1, 42))
        .with_address(mistagged_v4());
    let err = summarize(&snapshot).unwrap_err();
    assert_eq!(
        err,
        LinkError::InvalidAddressFormat {
            family: AddressFamily::Ipv4,
            len: 16
        }
    );
}
