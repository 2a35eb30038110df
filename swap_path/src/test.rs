#![cfg(test)]
extern crate std;

use crate::constants::{HOP_WIDTH, TOKEN_WIDTH};
use crate::{
    decode, encode, encode_hops, first_token, last_token, num_hops, reverse, tokens, PathError,
    PathHop, SwapHop,
};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Bytes, Env, String, Vec};

fn hop(token: &Address, fee: u32) -> PathHop {
    PathHop {
        token: token.clone(),
        fee,
    }
}

#[test]
fn test_two_hop_path() {
    let e = Env::default();
    let token_a = Address::generate(&e);
    let token_b = Address::generate(&e);
    let token_c = Address::generate(&e);

    let path = encode(
        &e,
        &vec![&e, hop(&token_a, 3000), hop(&token_b, 500)],
        &token_c,
    )
    .unwrap();

    assert_eq!(path.len(), TOKEN_WIDTH + 2 * HOP_WIDTH);
    assert_eq!(num_hops(&path), Ok(2));
    assert_eq!(first_token(&e, &path), Ok(token_a.clone()));
    assert_eq!(last_token(&e, &path), Ok(token_c.clone()));
    assert_eq!(
        tokens(&e, &path),
        Ok(vec![&e, token_a.clone(), token_b.clone(), token_c.clone()])
    );
    assert_eq!(
        decode(&e, &path),
        Ok(vec![
            &e,
            SwapHop {
                token_in: token_a,
                fee: 3000,
                token_out: token_b.clone(),
            },
            SwapHop {
                token_in: token_b,
                fee: 500,
                token_out: token_c,
            },
        ])
    );
}

#[test]
fn test_fee_is_big_endian() {
    let e = Env::default();
    let token_a = Address::generate(&e);
    let token_b = Address::generate(&e);

    let path = encode(&e, &vec![&e, hop(&token_a, 0x0001_0203)], &token_b).unwrap();
    assert_eq!(
        path.slice(TOKEN_WIDTH..HOP_WIDTH),
        Bytes::from_array(&e, &[0, 1, 2, 3])
    );
}

#[test]
fn test_reverse() {
    let e = Env::default();
    let token_a = Address::generate(&e);
    let token_b = Address::generate(&e);
    let token_c = Address::generate(&e);

    let path = encode(
        &e,
        &vec![&e, hop(&token_a, 3000), hop(&token_b, 500)],
        &token_c,
    )
    .unwrap();
    let reversed = reverse(&e, &path).unwrap();

    assert_eq!(
        reversed,
        encode(
            &e,
            &vec![&e, hop(&token_c, 500), hop(&token_b, 3000)],
            &token_a
        )
        .unwrap()
    );
    assert_eq!(reverse(&e, &reversed), Ok(path));
}

#[test]
fn test_many_hops() {
    let e = Env::default();
    e.cost_estimate().budget().reset_unlimited();

    for n in 1..=7_u32 {
        let mut chain = Vec::new(&e);
        for _ in 0..=n {
            chain.push_back(Address::generate(&e));
        }
        let mut hops = Vec::new(&e);
        for i in 0..n {
            hops.push_back(hop(&chain.get(i).unwrap(), 100 * (i + 1)));
        }
        let last = chain.get(n).unwrap();

        let path = encode(&e, &hops, &last).unwrap();
        assert_eq!(path.len(), TOKEN_WIDTH + n * HOP_WIDTH);
        assert_eq!(num_hops(&path), Ok(n));
        assert_eq!(tokens(&e, &path), Ok(chain.clone()));

        let decoded = decode(&e, &path).unwrap();
        assert_eq!(decoded.len(), n);
        for (i, swap_hop) in decoded.iter().enumerate() {
            let i = i as u32;
            assert_eq!(swap_hop.token_in, chain.get(i).unwrap());
            assert_eq!(swap_hop.fee, 100 * (i + 1));
            assert_eq!(swap_hop.token_out, chain.get(i + 1).unwrap());
        }
        assert_eq!(encode_hops(&e, &decoded), Ok(path.clone()));

        let reversed = reverse(&e, &path).unwrap();
        assert_eq!(first_token(&e, &reversed), Ok(last.clone()));
        assert_eq!(last_token(&e, &reversed), Ok(chain.get(0).unwrap()));
        assert_eq!(reverse(&e, &reversed), Ok(path));
    }
}

#[test]
fn test_encode_hops_matches_encode() {
    let e = Env::default();
    let token_a = Address::generate(&e);
    let token_b = Address::generate(&e);

    let hops = vec![
        &e,
        SwapHop {
            token_in: token_a.clone(),
            fee: 100,
            token_out: token_b.clone(),
        },
    ];
    let path = encode_hops(&e, &hops).unwrap();
    assert_eq!(path, encode(&e, &vec![&e, hop(&token_a, 100)], &token_b).unwrap());
    assert_eq!(decode(&e, &path), Ok(hops));
}

#[test]
fn test_broken_chain_rejected() {
    let e = Env::default();
    let token_a = Address::generate(&e);
    let token_b = Address::generate(&e);
    let token_c = Address::generate(&e);

    let hops = vec![
        &e,
        SwapHop {
            token_in: token_a.clone(),
            fee: 100,
            token_out: token_b.clone(),
        },
        SwapHop {
            token_in: token_c.clone(),
            fee: 100,
            token_out: token_a.clone(),
        },
    ];
    assert_eq!(encode_hops(&e, &hops), Err(PathError::MalformedPath));
}

#[test]
fn test_empty_hops_rejected() {
    let e = Env::default();
    let token = Address::generate(&e);

    assert_eq!(encode(&e, &vec![&e], &token), Err(PathError::MalformedPath));
    assert_eq!(encode_hops(&e, &vec![&e]), Err(PathError::MalformedPath));
}

#[test]
fn test_account_address_rejected() {
    let e = Env::default();
    let token = Address::generate(&e);
    let account = Address::from_string(&String::from_str(
        &e,
        "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF",
    ));

    assert_eq!(
        encode(&e, &vec![&e, hop(&token, 30)], &account),
        Err(PathError::MalformedPath)
    );
}

#[test]
fn test_malformed_length() {
    let e = Env::default();
    let token_a = Address::generate(&e);
    let token_b = Address::generate(&e);
    let path = encode(&e, &vec![&e, hop(&token_a, 30)], &token_b).unwrap();

    assert_eq!(decode(&e, &Bytes::new(&e)), Err(PathError::MalformedPath));
    // lone token, no pool
    assert_eq!(
        decode(&e, &path.slice(0..TOKEN_WIDTH)),
        Err(PathError::MalformedPath)
    );
    assert_eq!(
        decode(&e, &path.slice(0..path.len() - 1)),
        Err(PathError::MalformedPath)
    );

    let mut extended = path.clone();
    extended.extend_from_array(&[0, 0, 0, 30]);
    assert_eq!(decode(&e, &extended), Err(PathError::MalformedPath));
    assert_eq!(num_hops(&extended), Err(PathError::MalformedPath));
}

#[test]
fn test_garbage_token_rejected() {
    let e = Env::default();
    let garbage = Bytes::from_array(&e, &[7u8; (TOKEN_WIDTH + HOP_WIDTH) as usize]);

    assert_eq!(decode(&e, &garbage), Err(PathError::MalformedPath));
    assert_eq!(first_token(&e, &garbage), Err(PathError::MalformedPath));
    assert_eq!(reverse(&e, &garbage), Err(PathError::MalformedPath));
}
