/// Kind tag the host expects alongside every dispatched transaction payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Nop = 0,
    Transfer = 1,
    Contract = 2,
    Stake = 3,
    Batch = 4,
}

impl Tag {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Tag::Nop),
            1 => Some(Tag::Transfer),
            2 => Some(Tag::Contract),
            3 => Some(Tag::Stake),
            4 => Some(Tag::Batch),
            _ => None,
        }
    }
}

/// Operation selector for stake payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StakeOp {
    WithdrawStake = 0,
    PlaceStake = 1,
    WithdrawReward = 2,
}

impl StakeOp {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(StakeOp::WithdrawStake),
            1 => Some(StakeOp::PlaceStake),
            2 => Some(StakeOp::WithdrawReward),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trips_through_u8() {
        for tag in [Tag::Nop, Tag::Transfer, Tag::Contract, Tag::Stake, Tag::Batch] {
            assert_eq!(Tag::from_u8(tag as u8), Some(tag));
        }
        assert_eq!(Tag::from_u8(5), None);
    }

    #[test]
    fn stake_op_round_trips_through_u8() {
        for op in [StakeOp::WithdrawStake, StakeOp::PlaceStake, StakeOp::WithdrawReward] {
            assert_eq!(StakeOp::from_u8(op as u8), Some(op));
        }
        assert_eq!(StakeOp::from_u8(3), None);
    }
}
