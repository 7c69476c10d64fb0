//! Sensor packet ids and the fixed tables that drive their decoding.
//!
//! Ids 0 through 6 name groups, every other id names a single packet. Group
//! membership and order are part of the wire contract and are listed here
//! verbatim rather than derived.

use super::codec::{decode_signed_byte, decode_signed_word, decode_unsigned_word};
use super::{error::ParseResult, error::ProtocolError, *};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SensorId {
    Group0 = 0,
    Group1 = 1,
    Group2 = 2,
    Group3 = 3,
    Group4 = 4,
    Group5 = 5,
    Group6 = 6,
    BumpsAndWheelDrops = 7,
    Wall = 8,
    CliffLeft = 9,
    CliffFrontLeft = 10,
    CliffFrontRight = 11,
    CliffRight = 12,
    VirtualWall = 13,
    Overcurrents = 14,
    Unused1 = 15,
    Unused2 = 16,
    InfraredByte = 17,
    Buttons = 18,
    Distance = 19,
    Angle = 20,
    ChargingState = 21,
    Voltage = 22,
    Current = 23,
    BatteryTemperature = 24,
    BatteryCharge = 25,
    BatteryCapacity = 26,
    WallSignal = 27,
    CliffLeftSignal = 28,
    CliffFrontLeftSignal = 29,
    CliffFrontRightSignal = 30,
    CliffRightSignal = 31,
    CargoBayDigitalInputs = 32,
    CargoBayAnalogSignal = 33,
    ChargingSourcesAvailable = 34,
    OiMode = 35,
    SongNumber = 36,
    SongPlaying = 37,
    NumberOfStreamPackets = 38,
    RequestedVelocity = 39,
    RequestedRadius = 40,
    RequestedRightVelocity = 41,
    RequestedLeftVelocity = 42,
}

pub const SENSOR_ID_MAX: u8 = SensorId::RequestedLeftVelocity as u8;

const GROUP_0: &[SensorId] = &[
    SensorId::BumpsAndWheelDrops,
    SensorId::Wall,
    SensorId::CliffLeft,
    SensorId::CliffFrontLeft,
    SensorId::CliffFrontRight,
    SensorId::CliffRight,
    SensorId::VirtualWall,
    SensorId::Overcurrents,
    SensorId::Unused1,
    SensorId::Unused2,
    SensorId::InfraredByte,
    SensorId::Buttons,
    SensorId::Distance,
    SensorId::Angle,
    SensorId::ChargingState,
    SensorId::Voltage,
    SensorId::Current,
    SensorId::BatteryTemperature,
    SensorId::BatteryCharge,
    SensorId::BatteryCapacity,
];

const GROUP_1: &[SensorId] = &[
    SensorId::BumpsAndWheelDrops,
    SensorId::Wall,
    SensorId::CliffLeft,
    SensorId::CliffFrontLeft,
    SensorId::CliffFrontRight,
    SensorId::CliffRight,
    SensorId::VirtualWall,
    SensorId::Overcurrents,
    SensorId::Unused1,
    SensorId::Unused2,
];

const GROUP_2: &[SensorId] = &[
    SensorId::InfraredByte,
    SensorId::Buttons,
    SensorId::Distance,
    SensorId::Angle,
];

const GROUP_3: &[SensorId] = &[
    SensorId::ChargingState,
    SensorId::Voltage,
    SensorId::Current,
    SensorId::BatteryTemperature,
    SensorId::BatteryCharge,
    SensorId::BatteryCapacity,
];

const GROUP_4: &[SensorId] = &[
    SensorId::WallSignal,
    SensorId::CliffLeftSignal,
    SensorId::CliffFrontLeftSignal,
    SensorId::CliffFrontRightSignal,
    SensorId::CliffRightSignal,
    SensorId::CargoBayDigitalInputs,
    SensorId::CargoBayAnalogSignal,
    SensorId::ChargingSourcesAvailable,
];

const GROUP_5: &[SensorId] = &[
    SensorId::OiMode,
    SensorId::SongNumber,
    SensorId::SongPlaying,
    SensorId::NumberOfStreamPackets,
    SensorId::RequestedVelocity,
    SensorId::RequestedRadius,
    SensorId::RequestedRightVelocity,
    SensorId::RequestedLeftVelocity,
];

const GROUP_6: &[SensorId] = &[
    SensorId::BumpsAndWheelDrops,
    SensorId::Wall,
    SensorId::CliffLeft,
    SensorId::CliffFrontLeft,
    SensorId::CliffFrontRight,
    SensorId::CliffRight,
    SensorId::VirtualWall,
    SensorId::Overcurrents,
    SensorId::Unused1,
    SensorId::Unused2,
    SensorId::InfraredByte,
    SensorId::Buttons,
    SensorId::Distance,
    SensorId::Angle,
    SensorId::ChargingState,
    SensorId::Voltage,
    SensorId::Current,
    SensorId::BatteryTemperature,
    SensorId::BatteryCharge,
    SensorId::BatteryCapacity,
    SensorId::WallSignal,
    SensorId::CliffLeftSignal,
    SensorId::CliffFrontLeftSignal,
    SensorId::CliffFrontRightSignal,
    SensorId::CliffRightSignal,
    SensorId::CargoBayDigitalInputs,
    SensorId::CargoBayAnalogSignal,
    SensorId::ChargingSourcesAvailable,
    SensorId::OiMode,
    SensorId::SongNumber,
    SensorId::SongPlaying,
    SensorId::NumberOfStreamPackets,
    SensorId::RequestedVelocity,
    SensorId::RequestedRadius,
    SensorId::RequestedRightVelocity,
    SensorId::RequestedLeftVelocity,
];

/// A primitive value held in the telemetry cache.
///
/// Bit-packed packets fan out into several fields, so there are more fields
/// than primitive sensor ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    BumpRight,
    BumpLeft,
    WheelDropRight,
    WheelDropLeft,
    WheelDropCaster,
    Wall,
    CliffLeft,
    CliffFrontLeft,
    CliffFrontRight,
    CliffRight,
    VirtualWall,
    LowSideDriver0Overcurrent,
    LowSideDriver1Overcurrent,
    LowSideDriver2Overcurrent,
    RightWheelOvercurrent,
    LeftWheelOvercurrent,
    InfraredByte,
    PlayButton,
    AdvanceButton,
    Distance,
    Angle,
    ChargingState,
    Voltage,
    Current,
    BatteryTemperature,
    BatteryCharge,
    BatteryCapacity,
    WallSignal,
    CliffLeftSignal,
    CliffFrontLeftSignal,
    CliffFrontRightSignal,
    CliffRightSignal,
    CargoBayDigitalInput0,
    CargoBayDigitalInput1,
    CargoBayDigitalInput2,
    CargoBayDigitalInput3,
    CargoBayDeviceDetect,
    CargoBayAnalogSignal,
    InternalChargerAvailable,
    HomeBaseChargerAvailable,
    OiMode,
    SongNumber,
    SongPlaying,
    NumberOfStreamPackets,
    RequestedVelocity,
    RequestedRadius,
    RequestedRightVelocity,
    RequestedLeftVelocity,
}

impl Field {
    pub const COUNT: usize = Field::ALL.len();

    pub const ALL: [Field; 48] = [
        Field::BumpRight,
        Field::BumpLeft,
        Field::WheelDropRight,
        Field::WheelDropLeft,
        Field::WheelDropCaster,
        Field::Wall,
        Field::CliffLeft,
        Field::CliffFrontLeft,
        Field::CliffFrontRight,
        Field::CliffRight,
        Field::VirtualWall,
        Field::LowSideDriver0Overcurrent,
        Field::LowSideDriver1Overcurrent,
        Field::LowSideDriver2Overcurrent,
        Field::RightWheelOvercurrent,
        Field::LeftWheelOvercurrent,
        Field::InfraredByte,
        Field::PlayButton,
        Field::AdvanceButton,
        Field::Distance,
        Field::Angle,
        Field::ChargingState,
        Field::Voltage,
        Field::Current,
        Field::BatteryTemperature,
        Field::BatteryCharge,
        Field::BatteryCapacity,
        Field::WallSignal,
        Field::CliffLeftSignal,
        Field::CliffFrontLeftSignal,
        Field::CliffFrontRightSignal,
        Field::CliffRightSignal,
        Field::CargoBayDigitalInput0,
        Field::CargoBayDigitalInput1,
        Field::CargoBayDigitalInput2,
        Field::CargoBayDigitalInput3,
        Field::CargoBayDeviceDetect,
        Field::CargoBayAnalogSignal,
        Field::InternalChargerAvailable,
        Field::HomeBaseChargerAvailable,
        Field::OiMode,
        Field::SongNumber,
        Field::SongPlaying,
        Field::NumberOfStreamPackets,
        Field::RequestedVelocity,
        Field::RequestedRadius,
        Field::RequestedRightVelocity,
        Field::RequestedLeftVelocity,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Field::BumpRight => "bump_right",
            Field::BumpLeft => "bump_left",
            Field::WheelDropRight => "wheel_drop_right",
            Field::WheelDropLeft => "wheel_drop_left",
            Field::WheelDropCaster => "wheel_drop_caster",
            Field::Wall => "wall",
            Field::CliffLeft => "cliff_left",
            Field::CliffFrontLeft => "cliff_front_left",
            Field::CliffFrontRight => "cliff_front_right",
            Field::CliffRight => "cliff_right",
            Field::VirtualWall => "virtual_wall",
            Field::LowSideDriver0Overcurrent => "low_side_driver0_overcurrent",
            Field::LowSideDriver1Overcurrent => "low_side_driver1_overcurrent",
            Field::LowSideDriver2Overcurrent => "low_side_driver2_overcurrent",
            Field::RightWheelOvercurrent => "right_wheel_overcurrent",
            Field::LeftWheelOvercurrent => "left_wheel_overcurrent",
            Field::InfraredByte => "infrared_byte",
            Field::PlayButton => "play_button",
            Field::AdvanceButton => "advance_button",
            Field::Distance => "distance",
            Field::Angle => "angle",
            Field::ChargingState => "charging_state",
            Field::Voltage => "voltage",
            Field::Current => "current",
            Field::BatteryTemperature => "battery_temperature",
            Field::BatteryCharge => "battery_charge",
            Field::BatteryCapacity => "battery_capacity",
            Field::WallSignal => "wall_signal",
            Field::CliffLeftSignal => "cliff_left_signal",
            Field::CliffFrontLeftSignal => "cliff_front_left_signal",
            Field::CliffFrontRightSignal => "cliff_front_right_signal",
            Field::CliffRightSignal => "cliff_right_signal",
            Field::CargoBayDigitalInput0 => "cargo_bay_digital_input0",
            Field::CargoBayDigitalInput1 => "cargo_bay_digital_input1",
            Field::CargoBayDigitalInput2 => "cargo_bay_digital_input2",
            Field::CargoBayDigitalInput3 => "cargo_bay_digital_input3",
            Field::CargoBayDeviceDetect => "cargo_bay_device_detect",
            Field::CargoBayAnalogSignal => "cargo_bay_analog_signal",
            Field::InternalChargerAvailable => "internal_charger_available",
            Field::HomeBaseChargerAvailable => "home_base_charger_available",
            Field::OiMode => "oi_mode",
            Field::SongNumber => "song_number",
            Field::SongPlaying => "song_playing",
            Field::NumberOfStreamPackets => "number_of_stream_packets",
            Field::RequestedVelocity => "requested_velocity",
            Field::RequestedRadius => "requested_radius",
            Field::RequestedRightVelocity => "requested_right_velocity",
            Field::RequestedLeftVelocity => "requested_left_velocity",
        }
    }
}

/// How a numeric packet is laid out on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    UnsignedByte,
    SignedByte,
    UnsignedWord,
    SignedWord,
}

impl Encoding {
    pub const fn width(self) -> usize {
        match self {
            Encoding::UnsignedByte | Encoding::SignedByte => 1,
            Encoding::UnsignedWord | Encoding::SignedWord => 2,
        }
    }

    /// Decodes the leading `width()` bytes.
    pub fn decode(self, bytes: &[u8]) -> ParseResult<i32> {
        let needed = self.width();
        let Some(bytes) = bytes.get(..needed) else {
            return Err(ProtocolError::InsufficientData {
                needed,
                available: bytes.len(),
            });
        };

        Ok(match self {
            Encoding::UnsignedByte => bytes[0] as i32,
            Encoding::SignedByte => decode_signed_byte(bytes[0]) as i32,
            Encoding::UnsignedWord => decode_unsigned_word(bytes[0], bytes[1]) as i32,
            Encoding::SignedWord => decode_signed_word(bytes[0], bytes[1]) as i32,
        })
    }
}

/// Decode rule for a single (non-group) packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decode {
    Value(Field, Encoding),
    /// One byte fanned out into booleans, one `(mask, field)` pair per flag.
    Flags(&'static [(u8, Field)]),
    /// A byte the firmware sends but that carries nothing.
    Padding,
}

impl Decode {
    pub const fn width(self) -> usize {
        match self {
            Decode::Value(_, encoding) => encoding.width(),
            Decode::Flags(_) | Decode::Padding => 1,
        }
    }
}

/// What a sensor id stands for on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Packet {
    Group(&'static [SensorId]),
    Sensor(Decode),
}

const BUMPS_AND_WHEEL_DROPS: &[(u8, Field)] = &[
    (0x01, Field::BumpRight),
    (0x02, Field::BumpLeft),
    (0x04, Field::WheelDropRight),
    (0x08, Field::WheelDropLeft),
    (0x10, Field::WheelDropCaster),
];

// Driver 1 sits in bit 0 and driver 0 in bit 1.
const OVERCURRENTS: &[(u8, Field)] = &[
    (0x02, Field::LowSideDriver0Overcurrent),
    (0x01, Field::LowSideDriver1Overcurrent),
    (0x04, Field::LowSideDriver2Overcurrent),
    (0x08, Field::RightWheelOvercurrent),
    (0x10, Field::LeftWheelOvercurrent),
];

const BUTTONS: &[(u8, Field)] = &[(0x01, Field::PlayButton), (0x04, Field::AdvanceButton)];

const CARGO_BAY_DIGITAL_INPUTS: &[(u8, Field)] = &[
    (0x01, Field::CargoBayDigitalInput0),
    (0x02, Field::CargoBayDigitalInput1),
    (0x04, Field::CargoBayDigitalInput2),
    (0x08, Field::CargoBayDigitalInput3),
    (0x10, Field::CargoBayDeviceDetect),
];

const CHARGING_SOURCES: &[(u8, Field)] = &[
    (0x01, Field::InternalChargerAvailable),
    (0x02, Field::HomeBaseChargerAvailable),
];

impl SensorId {
    pub const fn packet(self) -> Packet {
        use Encoding::*;

        match self {
            SensorId::Group0 => Packet::Group(GROUP_0),
            SensorId::Group1 => Packet::Group(GROUP_1),
            SensorId::Group2 => Packet::Group(GROUP_2),
            SensorId::Group3 => Packet::Group(GROUP_3),
            SensorId::Group4 => Packet::Group(GROUP_4),
            SensorId::Group5 => Packet::Group(GROUP_5),
            SensorId::Group6 => Packet::Group(GROUP_6),
            SensorId::BumpsAndWheelDrops => Packet::Sensor(Decode::Flags(BUMPS_AND_WHEEL_DROPS)),
            SensorId::Wall => Packet::Sensor(Decode::Flags(&[(0x01, Field::Wall)])),
            SensorId::CliffLeft => Packet::Sensor(Decode::Flags(&[(0x01, Field::CliffLeft)])),
            SensorId::CliffFrontLeft => {
                Packet::Sensor(Decode::Flags(&[(0x01, Field::CliffFrontLeft)]))
            }
            SensorId::CliffFrontRight => {
                Packet::Sensor(Decode::Flags(&[(0x01, Field::CliffFrontRight)]))
            }
            SensorId::CliffRight => Packet::Sensor(Decode::Flags(&[(0x01, Field::CliffRight)])),
            SensorId::VirtualWall => Packet::Sensor(Decode::Flags(&[(0x01, Field::VirtualWall)])),
            SensorId::Overcurrents => Packet::Sensor(Decode::Flags(OVERCURRENTS)),
            SensorId::Unused1 | SensorId::Unused2 => Packet::Sensor(Decode::Padding),
            SensorId::InfraredByte => Packet::Sensor(Decode::Value(Field::InfraredByte, UnsignedByte)),
            SensorId::Buttons => Packet::Sensor(Decode::Flags(BUTTONS)),
            SensorId::Distance => Packet::Sensor(Decode::Value(Field::Distance, SignedWord)),
            SensorId::Angle => Packet::Sensor(Decode::Value(Field::Angle, SignedWord)),
            SensorId::ChargingState => {
                Packet::Sensor(Decode::Value(Field::ChargingState, UnsignedByte))
            }
            SensorId::Voltage => Packet::Sensor(Decode::Value(Field::Voltage, UnsignedWord)),
            SensorId::Current => Packet::Sensor(Decode::Value(Field::Current, SignedWord)),
            SensorId::BatteryTemperature => {
                Packet::Sensor(Decode::Value(Field::BatteryTemperature, SignedByte))
            }
            SensorId::BatteryCharge => {
                Packet::Sensor(Decode::Value(Field::BatteryCharge, UnsignedWord))
            }
            SensorId::BatteryCapacity => {
                Packet::Sensor(Decode::Value(Field::BatteryCapacity, UnsignedWord))
            }
            SensorId::WallSignal => Packet::Sensor(Decode::Value(Field::WallSignal, UnsignedWord)),
            SensorId::CliffLeftSignal => {
                Packet::Sensor(Decode::Value(Field::CliffLeftSignal, UnsignedWord))
            }
            SensorId::CliffFrontLeftSignal => {
                Packet::Sensor(Decode::Value(Field::CliffFrontLeftSignal, UnsignedWord))
            }
            SensorId::CliffFrontRightSignal => {
                Packet::Sensor(Decode::Value(Field::CliffFrontRightSignal, UnsignedWord))
            }
            SensorId::CliffRightSignal => {
                Packet::Sensor(Decode::Value(Field::CliffRightSignal, UnsignedWord))
            }
            SensorId::CargoBayDigitalInputs => {
                Packet::Sensor(Decode::Flags(CARGO_BAY_DIGITAL_INPUTS))
            }
            SensorId::CargoBayAnalogSignal => {
                Packet::Sensor(Decode::Value(Field::CargoBayAnalogSignal, UnsignedWord))
            }
            SensorId::ChargingSourcesAvailable => Packet::Sensor(Decode::Flags(CHARGING_SOURCES)),
            SensorId::OiMode => Packet::Sensor(Decode::Value(Field::OiMode, UnsignedByte)),
            SensorId::SongNumber => Packet::Sensor(Decode::Value(Field::SongNumber, UnsignedByte)),
            SensorId::SongPlaying => Packet::Sensor(Decode::Flags(&[(0x01, Field::SongPlaying)])),
            SensorId::NumberOfStreamPackets => {
                Packet::Sensor(Decode::Value(Field::NumberOfStreamPackets, UnsignedByte))
            }
            SensorId::RequestedVelocity => {
                Packet::Sensor(Decode::Value(Field::RequestedVelocity, SignedWord))
            }
            SensorId::RequestedRadius => {
                Packet::Sensor(Decode::Value(Field::RequestedRadius, SignedWord))
            }
            SensorId::RequestedRightVelocity => {
                Packet::Sensor(Decode::Value(Field::RequestedRightVelocity, SignedWord))
            }
            SensorId::RequestedLeftVelocity => {
                Packet::Sensor(Decode::Value(Field::RequestedLeftVelocity, SignedWord))
            }
        }
    }

    pub const fn is_group(self) -> bool {
        matches!(self.packet(), Packet::Group(_))
    }

    /// Number of response bytes the firmware sends for this id.
    pub fn wire_width(self) -> usize {
        match self.packet() {
            Packet::Group(members) => members.iter().map(|id| id.wire_width()).sum(),
            Packet::Sensor(decode) => decode.width(),
        }
    }
}

impl From<SensorId> for u8 {
    fn from(id: SensorId) -> Self {
        id as u8
    }
}

impl TryFrom<u8> for SensorId {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use SensorId::*;

        const IDS: [SensorId; SENSOR_ID_MAX as usize + 1] = [
            Group0,
            Group1,
            Group2,
            Group3,
            Group4,
            Group5,
            Group6,
            BumpsAndWheelDrops,
            Wall,
            CliffLeft,
            CliffFrontLeft,
            CliffFrontRight,
            CliffRight,
            VirtualWall,
            Overcurrents,
            Unused1,
            Unused2,
            InfraredByte,
            Buttons,
            Distance,
            Angle,
            ChargingState,
            Voltage,
            Current,
            BatteryTemperature,
            BatteryCharge,
            BatteryCapacity,
            WallSignal,
            CliffLeftSignal,
            CliffFrontLeftSignal,
            CliffFrontRightSignal,
            CliffRightSignal,
            CargoBayDigitalInputs,
            CargoBayAnalogSignal,
            ChargingSourcesAvailable,
            OiMode,
            SongNumber,
            SongPlaying,
            NumberOfStreamPackets,
            RequestedVelocity,
            RequestedRadius,
            RequestedRightVelocity,
            RequestedLeftVelocity,
        ];

        IDS.get(value as usize)
            .copied()
            .ok_or(ProtocolError::UnknownSensorId(value))
    }
}

/// Resolves a raw id to its decode rule.
pub fn lookup(raw: u8) -> ParseResult<Packet> {
    SensorId::try_from(raw).map(SensorId::packet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_ids_map_to_their_discriminant() {
        for raw in 0..=SENSOR_ID_MAX {
            let id = SensorId::try_from(raw).unwrap();
            assert_eq!(id as u8, raw);
        }
    }

    #[test]
    fn rejects_ids_past_the_table() {
        assert_eq!(
            SensorId::try_from(43u8),
            Err(ProtocolError::UnknownSensorId(43))
        );
        assert_eq!(lookup(200), Err(ProtocolError::UnknownSensorId(200)));
    }

    #[test]
    fn group_widths() {
        let widths: Vec<usize> = (0..=6u8)
            .map(|g| SensorId::try_from(g).unwrap().wire_width())
            .collect();
        assert_eq!(widths, [26, 10, 6, 10, 14, 12, 52]);
    }

    #[test]
    fn group_six_is_every_primitive_in_id_order() {
        let Packet::Group(members) = SensorId::Group6.packet() else {
            panic!("group 6 is a group");
        };
        let raw: Vec<u8> = members.iter().map(|id| *id as u8).collect();
        assert_eq!(raw, (7..=42).collect::<Vec<u8>>());
    }

    #[test]
    fn group_zero_is_groups_one_to_three() {
        let (Packet::Group(g0), Packet::Group(g1), Packet::Group(g2), Packet::Group(g3)) = (
            SensorId::Group0.packet(),
            SensorId::Group1.packet(),
            SensorId::Group2.packet(),
            SensorId::Group3.packet(),
        ) else {
            panic!("groups expected");
        };
        let joined: Vec<SensorId> = [g1, g2, g3].concat();
        assert_eq!(g0, joined.as_slice());
    }

    #[test]
    fn no_group_nests_another() {
        for raw in 0..=6u8 {
            let Packet::Group(members) = SensorId::try_from(raw).unwrap().packet() else {
                panic!("{raw} should be a group");
            };
            assert!(members.iter().all(|id| !id.is_group()));
        }
    }

    #[test]
    fn every_field_is_written_by_exactly_one_packet() {
        let mut seen = [0usize; Field::COUNT];
        for raw in 7..=SENSOR_ID_MAX {
            match SensorId::try_from(raw).unwrap().packet() {
                Packet::Sensor(Decode::Value(field, _)) => seen[field.index()] += 1,
                Packet::Sensor(Decode::Flags(flags)) => {
                    for (_, field) in flags {
                        seen[field.index()] += 1;
                    }
                }
                Packet::Sensor(Decode::Padding) => {}
                Packet::Group(_) => panic!("{raw} is not a group"),
            }
        }
        assert!(seen.iter().all(|count| *count == 1), "{seen:?}");
    }

    #[test]
    fn field_table_is_in_discriminant_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn encodings_decode_sign_correctly() {
        assert_eq!(Encoding::SignedWord.decode(&[0xFF, 0xFE]), Ok(-2));
        assert_eq!(Encoding::UnsignedWord.decode(&[0xFF, 0xFE]), Ok(65534));
        assert_eq!(Encoding::SignedByte.decode(&[0xEC]), Ok(-20));
        assert_eq!(Encoding::UnsignedByte.decode(&[0xEC]), Ok(236));
    }

    #[test]
    fn short_input_is_an_error_not_a_panic() {
        assert_eq!(
            Encoding::SignedWord.decode(&[0xFF]),
            Err(ProtocolError::InsufficientData {
                needed: 2,
                available: 1
            })
        );
        assert_eq!(
            Encoding::UnsignedByte.decode(&[]),
            Err(ProtocolError::InsufficientData {
                needed: 1,
                available: 0
            })
        );
    }
}
