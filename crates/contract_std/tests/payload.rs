use contract_std::params::Parameters;
use contract_std::payload::{ContractDeploy, Stake, Transfer};
use once_cell::sync::Lazy;
use types::address::Address;
use types::transaction::StakeOp;

struct PayloadCase {
    name: &'static str,
    bytes: Vec<u8>,
    expected_len: usize,
}

static PAYLOAD_CASES: Lazy<Vec<PayloadCase>> = Lazy::new(|| {
    vec![
        PayloadCase {
            name: "plain transfer",
            bytes: Transfer::new(Address([0u8; 32]), 100).marshal(),
            expected_len: 32 + 8 + 8 + 8,
        },
        PayloadCase {
            name: "transfer with function call",
            bytes: Transfer {
                recipient: Address([0u8; 32]),
                amount: 100,
                gas_limit: 0,
                gas_deposit: 0,
                func_name: Some("go".into()),
                func_params: Some(vec![1, 2, 3]),
            }
            .marshal(),
            expected_len: 56 + 4 + 2 + 4 + 3,
        },
        PayloadCase {
            name: "transfer with function name only",
            bytes: Transfer {
                recipient: Address([0u8; 32]),
                amount: 1,
                gas_limit: 0,
                gas_deposit: 0,
                func_name: Some("go".into()),
                func_params: None,
            }
            .marshal(),
            expected_len: 56 + 4 + 2,
        },
        PayloadCase {
            name: "transfer with empty function name",
            bytes: Transfer {
                recipient: Address([0u8; 32]),
                amount: 1,
                gas_limit: 7,
                gas_deposit: 9,
                func_name: Some(String::new()),
                func_params: Some(vec![1]),
            }
            .marshal(),
            expected_len: 56,
        },
        PayloadCase {
            name: "stake",
            bytes: Stake::new(StakeOp::PlaceStake, 4096).marshal(),
            expected_len: 1 + 8,
        },
        PayloadCase {
            name: "contract deploy",
            bytes: ContractDeploy::new(10, 20, vec![1, 2], vec![3, 4, 5]).marshal(),
            expected_len: 8 + 8 + 4 + 2 + 3,
        },
    ]
});

#[test]
fn test_payload_lengths() {
    for case in PAYLOAD_CASES.iter() {
        assert_eq!(case.bytes.len(), case.expected_len, "{}", case.name);
    }
}

#[test]
fn test_plain_transfer_layout() {
    let recipient = Address([0u8; 32]);
    let bytes = Transfer::new(recipient, 100).marshal();

    assert_eq!(bytes.len(), 56);
    assert_eq!(&bytes[..32], &[0u8; 32]);
    assert_eq!(u64::from_le_bytes(bytes[32..40].try_into().unwrap()), 100);
    // gas_limit and gas_deposit default to zero.
    assert_eq!(&bytes[40..56], &[0u8; 16]);
}

#[test]
fn test_transfer_with_function_call_layout() {
    let bytes = Transfer {
        recipient: Address([0x11; 32]),
        amount: 100,
        gas_limit: 0,
        gas_deposit: 0,
        func_name: Some("go".into()),
        func_params: Some(vec![1, 2, 3]),
    }
    .marshal();

    assert_eq!(bytes.len(), 69);
    assert_eq!(u32::from_le_bytes(bytes[56..60].try_into().unwrap()), 2);
    assert_eq!(&bytes[60..62], b"go"); // no terminator
    assert_eq!(u32::from_le_bytes(bytes[62..66].try_into().unwrap()), 3);
    assert_eq!(&bytes[66..69], &[1, 2, 3]);
}

#[test]
fn test_stake_layout() {
    let bytes = Stake::new(StakeOp::WithdrawReward, 0x0102_0304).marshal();
    assert_eq!(bytes[0], 2);
    assert_eq!(u64::from_le_bytes(bytes[1..9].try_into().unwrap()), 0x0102_0304);
}

#[test]
fn test_contract_deploy_layout() {
    let bytes = ContractDeploy::new(10, 20, vec![1, 2], vec![3, 4, 5]).marshal();

    assert_eq!(u64::from_le_bytes(bytes[0..8].try_into().unwrap()), 10);
    assert_eq!(u64::from_le_bytes(bytes[8..16].try_into().unwrap()), 20);
    assert_eq!(u32::from_le_bytes(bytes[16..20].try_into().unwrap()), 2);
    assert_eq!(&bytes[20..22], &[1, 2]);
    // Code runs to the end of the payload, no length prefix.
    assert_eq!(&bytes[22..], &[3, 4, 5]);
}

// Feeding a marshalled payload back through the parameter reader exercises
// both directions of the codec over the same bytes.
#[test]
fn test_transfer_round_trips_through_the_reader() {
    let payload = Transfer {
        recipient: Address([0x22; 32]),
        amount: 12345,
        gas_limit: 77,
        gas_deposit: 88,
        func_name: Some("go".into()),
        func_params: Some(vec![9, 8, 7]),
    }
    .marshal();

    let mut buf = vec![0u8; 112];
    buf.extend_from_slice(&payload);
    let mut params = Parameters::from_bytes(buf);

    assert_eq!(params.read_bytes(32), vec![0x22; 32]);
    assert_eq!(params.read_u64(), 12345);
    assert_eq!(params.read_u64(), 77);
    assert_eq!(params.read_u64(), 88);
    assert_eq!(params.read_bytes(0), b"go");
    assert_eq!(params.read_bytes(0), vec![9, 8, 7]);
    assert_eq!(params.remaining(), 0);
}

#[test]
fn test_stake_round_trips_through_the_reader() {
    let payload = Stake::new(StakeOp::PlaceStake, 999).marshal();

    let mut buf = vec![0u8; 112];
    buf.extend_from_slice(&payload);
    let mut params = Parameters::from_bytes(buf);

    assert_eq!(StakeOp::from_u8(params.read_u8()), Some(StakeOp::PlaceStake));
    assert_eq!(params.read_u64(), 999);
}
