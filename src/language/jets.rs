//! Jet catalogue.

use super::Jet;
use super::JetGroup::*;

pub const JETS: &[Jet] = &[
    // Arithmetic
    Jet {
        name: "add_8",
        signature: "(Word8, Word8) -> (Bit, Word8)",
        description: "Addition of two 8-bit words returning carry bit and sum",
        group: Arithmetic,
    },
    Jet {
        name: "add_16",
        signature: "(Word16, Word16) -> (Bit, Word16)",
        description: "Addition of two 16-bit words returning carry bit and sum",
        group: Arithmetic,
    },
    Jet {
        name: "add_32",
        signature: "(Word32, Word32) -> (Bit, Word32)",
        description: "Addition of two 32-bit words returning carry bit and sum",
        group: Arithmetic,
    },
    Jet {
        name: "add_64",
        signature: "(Word64, Word64) -> (Bit, Word64)",
        description: "Addition of two 64-bit words returning carry bit and sum",
        group: Arithmetic,
    },
    Jet {
        name: "subtract_32",
        signature: "(Word32, Word32) -> (Bit, Word32)",
        description: "Subtraction of two 32-bit words returning borrow bit and difference",
        group: Arithmetic,
    },
    Jet {
        name: "subtract_64",
        signature: "(Word64, Word64) -> (Bit, Word64)",
        description: "Subtraction of two 64-bit words returning borrow bit and difference",
        group: Arithmetic,
    },
    Jet {
        name: "multiply_32",
        signature: "(Word32, Word32) -> Word64",
        description: "Multiply two 32-bit words producing 64-bit result",
        group: Arithmetic,
    },
    Jet {
        name: "multiply_64",
        signature: "(Word64, Word64) -> Word128",
        description: "Multiply two 64-bit words producing 128-bit result",
        group: Arithmetic,
    },
    Jet {
        name: "div_mod_32",
        signature: "(Word32, Word32) -> (Word32, Word32)",
        description: "Division and modulo of two 32-bit words",
        group: Arithmetic,
    },
    Jet {
        name: "div_mod_64",
        signature: "(Word64, Word64) -> (Word64, Word64)",
        description: "Division and modulo of two 64-bit words",
        group: Arithmetic,
    },
    // Bitwise
    Jet {
        name: "and_32",
        signature: "(Word32, Word32) -> Word32",
        description: "Bitwise AND of two 32-bit words",
        group: Bitwise,
    },
    Jet {
        name: "or_32",
        signature: "(Word32, Word32) -> Word32",
        description: "Bitwise OR of two 32-bit words",
        group: Bitwise,
    },
    Jet {
        name: "xor_32",
        signature: "(Word32, Word32) -> Word32",
        description: "Bitwise XOR of two 32-bit words",
        group: Bitwise,
    },
    Jet {
        name: "complement_32",
        signature: "Word32 -> Word32",
        description: "Bitwise NOT of 32-bit word",
        group: Bitwise,
    },
    Jet {
        name: "left_shift_32",
        signature: "(Word8, Word32) -> Word32",
        description: "Left shift 32-bit word by specified amount",
        group: Bitwise,
    },
    Jet {
        name: "right_shift_32",
        signature: "(Word8, Word32) -> Word32",
        description: "Right shift 32-bit word by specified amount",
        group: Bitwise,
    },
    // Comparison
    Jet {
        name: "eq_32",
        signature: "(Word32, Word32) -> Bit",
        description: "Test equality of two 32-bit words",
        group: Comparison,
    },
    Jet {
        name: "eq_256",
        signature: "(Word256, Word256) -> Bit",
        description: "Test equality of two 256-bit words",
        group: Comparison,
    },
    Jet {
        name: "lt_32",
        signature: "(Word32, Word32) -> Bit",
        description: "Test if first 32-bit word is less than second",
        group: Comparison,
    },
    Jet {
        name: "lt_64",
        signature: "(Word64, Word64) -> Bit",
        description: "Test if first 64-bit word is less than second",
        group: Comparison,
    },
    Jet {
        name: "is_zero_32",
        signature: "Word32 -> Bit",
        description: "Test if 32-bit word is zero",
        group: Comparison,
    },
    // Crypto & Hashing
    Jet {
        name: "sha_256",
        signature: "Hash256 -> Hash256",
        description: "Compute SHA-256 hash",
        group: Crypto,
    },
    Jet {
        name: "sha_256_block",
        signature: "(Hash256, Block512) -> Hash256",
        description: "Process single 512-bit block through SHA256",
        group: Crypto,
    },
    Jet {
        name: "sha_256_ctx_8_init",
        signature: "() -> Ctx8",
        description: "Initialize SHA256 context",
        group: Crypto,
    },
    Jet {
        name: "sha_256_ctx_8_add_32",
        signature: "(Ctx8, Word32) -> Ctx8",
        description: "Add 32-bit data to SHA256 context",
        group: Crypto,
    },
    Jet {
        name: "sha_256_ctx_8_finalize",
        signature: "Ctx8 -> Hash256",
        description: "Finalize SHA256 hash computation",
        group: Crypto,
    },
    Jet {
        name: "bip_0340_verify",
        signature: "((PubKey, Word256), Sig) -> ()",
        description: "Verify BIP-340 Schnorr signature",
        group: Crypto,
    },
    Jet {
        name: "check_sig_verify",
        signature: "((PubKey, Word512), Sig) -> ()",
        description: "Verify Schnorr signature and fail if invalid",
        group: Crypto,
    },
    Jet {
        name: "fe_normalize",
        signature: "FE -> FE",
        description: "Normalize secp256k1 field element",
        group: Crypto,
    },
    // Elements / Liquid
    Jet {
        name: "version",
        signature: "() -> Word32",
        description: "Get transaction version number",
        group: Elements,
    },
    Jet {
        name: "lock_time",
        signature: "() -> Word32",
        description: "Get transaction lock time",
        group: Elements,
    },
    Jet {
        name: "input_index",
        signature: "() -> Word32",
        description: "Get index of current input",
        group: Elements,
    },
    Jet {
        name: "input_value",
        signature: "Word32 -> Maybe Word64",
        description: "Get value of specified input",
        group: Elements,
    },
    Jet {
        name: "input_asset",
        signature: "Word32 -> Maybe ConfWord256",
        description: "Get asset ID of specified input",
        group: Elements,
    },
    Jet {
        name: "output_value",
        signature: "Word32 -> Maybe Word64",
        description: "Get value of specified output",
        group: Elements,
    },
    Jet {
        name: "output_asset",
        signature: "Word32 -> Maybe ConfWord256",
        description: "Get asset ID of specified output",
        group: Elements,
    },
    Jet {
        name: "current_index",
        signature: "() -> Word32",
        description: "Get index of current input being validated",
        group: Elements,
    },
    Jet {
        name: "current_value",
        signature: "() -> Word64",
        description: "Get value of current input",
        group: Elements,
    },
    Jet {
        name: "num_inputs",
        signature: "() -> Word32",
        description: "Get number of transaction inputs",
        group: Elements,
    },
    Jet {
        name: "num_outputs",
        signature: "() -> Word32",
        description: "Get number of transaction outputs",
        group: Elements,
    },
    Jet {
        name: "check_lock_height",
        signature: "Word32 -> ()",
        description: "Verify input's locktime uses block height",
        group: Elements,
    },
    Jet {
        name: "check_lock_time",
        signature: "Word32 -> ()",
        description: "Verify input's locktime uses block time",
        group: Elements,
    },
    Jet {
        name: "sig_all_hash",
        signature: "() -> Word256",
        description: "Compute SIGHASH_ALL message hash",
        group: Elements,
    },
];
