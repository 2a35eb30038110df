use crate::constants::{CONTRACT_ADDRESS_PREFIX, FEE_WIDTH, HOP_WIDTH, TOKEN_WIDTH};
use crate::errors::PathError;
use crate::types::{PathHop, SwapHop};
use soroban_sdk::xdr::{FromXdr, ToXdr};
use soroban_sdk::{Address, Bytes, Env, Vec};

fn has_contract_prefix(chunk: &Bytes) -> bool {
    let mut prefix = [0u8; CONTRACT_ADDRESS_PREFIX.len()];
    chunk
        .slice(0..CONTRACT_ADDRESS_PREFIX.len() as u32)
        .copy_into_slice(&mut prefix);
    prefix == CONTRACT_ADDRESS_PREFIX
}

fn write_token(e: &Env, path: &mut Bytes, token: &Address) -> Result<(), PathError> {
    let encoded = token.clone().to_xdr(e);
    // account addresses encode wider and are never tokens
    if encoded.len() != TOKEN_WIDTH || !has_contract_prefix(&encoded) {
        return Err(PathError::MalformedPath);
    }
    path.append(&encoded);
    Ok(())
}

fn read_token(e: &Env, path: &Bytes, offset: u32) -> Result<Address, PathError> {
    let chunk = path.slice(offset..offset + TOKEN_WIDTH);
    if !has_contract_prefix(&chunk) {
        return Err(PathError::MalformedPath);
    }
    Address::from_xdr(e, &chunk).map_err(|_| PathError::MalformedPath)
}

fn read_fee(path: &Bytes, offset: u32) -> u32 {
    let mut buf = [0u8; FEE_WIDTH as usize];
    path.slice(offset..offset + FEE_WIDTH).copy_into_slice(&mut buf);
    u32::from_be_bytes(buf)
}

// Number of pools the path swaps through. A valid path holds at least one.
pub fn num_hops(path: &Bytes) -> Result<u32, PathError> {
    let len = path.len();
    if len < TOKEN_WIDTH + HOP_WIDTH || (len - TOKEN_WIDTH) % HOP_WIDTH != 0 {
        return Err(PathError::MalformedPath);
    }
    Ok((len - TOKEN_WIDTH) / HOP_WIDTH)
}

// encode
// Packs `token0 | fee0 | token1 | fee1 | ... | tokenN`.
//
// Arguments:
//   - e: The Soroban environment.
//   - hops: Each input token with the fee of the pool it is sold into.
//   - final_token: Output token of the last pool.
pub fn encode(e: &Env, hops: &Vec<PathHop>, final_token: &Address) -> Result<Bytes, PathError> {
    if hops.is_empty() {
        return Err(PathError::MalformedPath);
    }

    let mut path = Bytes::new(e);
    for hop in hops.iter() {
        write_token(e, &mut path, &hop.token)?;
        path.extend_from_array(&hop.fee.to_be_bytes());
    }
    write_token(e, &mut path, final_token)?;
    Ok(path)
}

// Same as `encode`, from decoded hops. Hops must chain.
pub fn encode_hops(e: &Env, hops: &Vec<SwapHop>) -> Result<Bytes, PathError> {
    let last = match hops.last() {
        Some(v) => v,
        None => return Err(PathError::MalformedPath),
    };

    let mut chained = Vec::new(e);
    let mut expected_in: Option<Address> = None;
    for hop in hops.iter() {
        if let Some(prev_out) = expected_in {
            if prev_out != hop.token_in {
                return Err(PathError::MalformedPath);
            }
        }
        chained.push_back(PathHop {
            token: hop.token_in.clone(),
            fee: hop.fee,
        });
        expected_in = Some(hop.token_out);
    }
    encode(e, &chained, &last.token_out)
}

pub fn decode(e: &Env, path: &Bytes) -> Result<Vec<SwapHop>, PathError> {
    let count = num_hops(path)?;

    let mut hops = Vec::new(e);
    let mut token_in = read_token(e, path, 0)?;
    for i in 0..count {
        let offset = i * HOP_WIDTH;
        let fee = read_fee(path, offset + TOKEN_WIDTH);
        let token_out = read_token(e, path, offset + HOP_WIDTH)?;
        hops.push_back(SwapHop {
            token_in,
            fee,
            token_out: token_out.clone(),
        });
        token_in = token_out;
    }
    Ok(hops)
}

// Every token on the path in swap order, endpoints included.
pub fn tokens(e: &Env, path: &Bytes) -> Result<Vec<Address>, PathError> {
    let count = num_hops(path)?;
    let mut result = Vec::new(e);
    for i in 0..=count {
        result.push_back(read_token(e, path, i * HOP_WIDTH)?);
    }
    Ok(result)
}

pub fn first_token(e: &Env, path: &Bytes) -> Result<Address, PathError> {
    num_hops(path)?;
    read_token(e, path, 0)
}

pub fn last_token(e: &Env, path: &Bytes) -> Result<Address, PathError> {
    let count = num_hops(path)?;
    read_token(e, path, count * HOP_WIDTH)
}

// Path walking the same pools in the opposite direction.
pub fn reverse(e: &Env, path: &Bytes) -> Result<Bytes, PathError> {
    let hops = decode(e, path)?;
    let mut reversed = Vec::new(e);
    for i in (0..hops.len()).rev() {
        let hop = hops.get_unchecked(i);
        reversed.push_back(SwapHop {
            token_in: hop.token_out,
            fee: hop.fee,
            token_out: hop.token_in,
        });
    }
    encode_hops(e, &reversed)
}
