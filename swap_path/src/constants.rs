// XDR encoding of a contract address: ScVal tag, ScAddress tag, 32 byte contract id
pub const TOKEN_WIDTH: u32 = 40;
// big-endian u32 pool fee
pub const FEE_WIDTH: u32 = 4;
pub const HOP_WIDTH: u32 = TOKEN_WIDTH + FEE_WIDTH;

// ScVal::Address discriminant followed by ScAddress::Contract discriminant
pub const CONTRACT_ADDRESS_PREFIX: [u8; 8] = [0, 0, 0, 18, 0, 0, 0, 1];
