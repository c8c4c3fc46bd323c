//! Special-purpose register names (subset of the architecture's table).

pub struct Spr {
    pub number: u32,
    pub name: &'static str,
}

pub const SPRS: &[Spr] = &[
    Spr { number: 0x0004, name: "MPL_ITLB_MISS" },
    Spr { number: 0x0104, name: "ITLB_INDEX" },
    Spr { number: 0x010a, name: "ITLB_PERF" },
    Spr { number: 0x0404, name: "MPL_ILL" },
    Spr { number: 0x0604, name: "MPL_GPV" },
    Spr { number: 0x0605, name: "GPV_REASON" },
    Spr { number: 0x0804, name: "MPL_SN_ACCESS" },
    Spr { number: 0x0805, name: "SNCTL" },
    Spr { number: 0x0806, name: "SNFIFO_DATA" },
    Spr { number: 0x080b, name: "SNPC" },
    Spr { number: 0x0900, name: "SN_DATA_AVAIL" },
    Spr { number: 0x0a05, name: "IDN_DEMUX_CA_COUNT" },
    Spr { number: 0x0a0a, name: "IDN_DEMUX_QUEUE_SEL" },
    Spr { number: 0x0b03, name: "IDN_DATA_AVAIL" },
    Spr { number: 0x0c05, name: "UDN_DEMUX_CA_COUNT" },
    Spr { number: 0x0c0c, name: "UDN_DEMUX_QUEUE_SEL" },
    Spr { number: 0x0d03, name: "UDN_DATA_AVAIL" },
    Spr { number: 0x0808, name: "SNIC_INVADDR" },
    Spr { number: 0x080c, name: "SNSTATIC" },
];

pub fn lookup(name: &str) -> Option<u32> {
    SPRS.iter().find(|s| s.name == name).map(|s| s.number)
}

pub fn name_of(number: u32) -> Option<&'static str> {
    SPRS.iter().find(|s| s.number == number).map(|s| s.name)
}
