//! Last-decoded sensor values.
//!
//! The cache only changes when a response is applied to it. Accessors never
//! trigger I/O, so a value is as fresh as the last read that covered it.

use crate::protocol::error::{ParseResult, ProtocolError};
use crate::protocol::sensor::{Decode, Encoding, Field, Packet, SensorId};
use crate::{ChargingState, Mode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Telemetry {
    values: [i32; Field::COUNT],
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! value_accessors {
    ($($name:ident => $field:ident),* $(,)?) => {
        $(
            pub fn $name(&self) -> i32 {
                self.get(Field::$field)
            }
        )*
    };
}

macro_rules! flag_accessors {
    ($($name:ident => $field:ident),* $(,)?) => {
        $(
            pub fn $name(&self) -> bool {
                self.flag(Field::$field)
            }
        )*
    };
}

impl Telemetry {
    pub const fn new() -> Self {
        Self {
            values: [0; Field::COUNT],
        }
    }

    pub fn get(&self, field: Field) -> i32 {
        self.values[field.index()]
    }

    pub fn flag(&self, field: Field) -> bool {
        self.get(field) != 0
    }

    pub fn set(&mut self, field: Field, value: i32) {
        self.values[field.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, i32)> + '_ {
        let fields: &'static [Field] = &Field::ALL;
        fields.iter().map(|field| (*field, self.get(*field)))
    }

    /// Decodes the response to a request for `id` from the front of `bytes`
    /// and returns how many bytes it took.
    ///
    /// Nothing is written when `bytes` is shorter than the packet.
    pub fn apply(&mut self, id: SensorId, bytes: &[u8]) -> ParseResult<usize> {
        let needed = id.wire_width();
        if bytes.len() < needed {
            return Err(ProtocolError::InsufficientData {
                needed,
                available: bytes.len(),
            });
        }

        self.decode(id, &bytes[..needed])
    }

    fn decode(&mut self, id: SensorId, bytes: &[u8]) -> ParseResult<usize> {
        match id.packet() {
            Packet::Group(members) => members.iter().try_fold(0, |offset, member| {
                Ok(offset + self.decode(*member, &bytes[offset..])?)
            }),
            Packet::Sensor(decode) => {
                self.store(decode, bytes)?;
                Ok(decode.width())
            }
        }
    }

    fn store(&mut self, decode: Decode, bytes: &[u8]) -> ParseResult<()> {
        match decode {
            Decode::Value(field, encoding) => self.set(field, encoding.decode(bytes)?),
            Decode::Flags(flags) => {
                let byte = Encoding::UnsignedByte.decode(bytes)?;
                for (mask, field) in flags {
                    self.set(*field, ((byte & i32::from(*mask)) != 0) as i32);
                }
            }
            Decode::Padding => {}
        }
        Ok(())
    }

    /// Mode last reported by the firmware, if the raw value is a known one.
    pub fn mode(&self) -> Option<Mode> {
        u8::try_from(self.oi_mode())
            .ok()
            .and_then(|raw| Mode::try_from(raw).ok())
    }

    pub fn charging_state(&self) -> Option<ChargingState> {
        u8::try_from(self.get(Field::ChargingState))
            .ok()
            .and_then(|raw| ChargingState::try_from(raw).ok())
    }

    value_accessors! {
        angle => Angle,
        distance => Distance,
        battery_capacity => BatteryCapacity,
        battery_charge => BatteryCharge,
        battery_temperature => BatteryTemperature,
        cargo_bay_analog_signal => CargoBayAnalogSignal,
        charging_state_raw => ChargingState,
        cliff_front_left_signal => CliffFrontLeftSignal,
        cliff_front_right_signal => CliffFrontRightSignal,
        cliff_left_signal => CliffLeftSignal,
        cliff_right_signal => CliffRightSignal,
        current => Current,
        infrared_byte => InfraredByte,
        oi_mode => OiMode,
        requested_left_velocity => RequestedLeftVelocity,
        requested_radius => RequestedRadius,
        requested_right_velocity => RequestedRightVelocity,
        requested_velocity => RequestedVelocity,
        song_number => SongNumber,
        number_of_stream_packets => NumberOfStreamPackets,
        voltage => Voltage,
        wall_signal => WallSignal,
    }

    flag_accessors! {
        is_advance_button_down => AdvanceButton,
        is_play_button_down => PlayButton,
        is_bump_left => BumpLeft,
        is_bump_right => BumpRight,
        is_cargo_bay_device_detect => CargoBayDeviceDetect,
        is_cargo_bay_digital_input0_high => CargoBayDigitalInput0,
        is_cargo_bay_digital_input1_high => CargoBayDigitalInput1,
        is_cargo_bay_digital_input2_high => CargoBayDigitalInput2,
        is_cargo_bay_digital_input3_high => CargoBayDigitalInput3,
        is_cliff_front_left => CliffFrontLeft,
        is_cliff_front_right => CliffFrontRight,
        is_cliff_left => CliffLeft,
        is_cliff_right => CliffRight,
        is_home_base_charger_available => HomeBaseChargerAvailable,
        is_internal_charger_available => InternalChargerAvailable,
        is_left_wheel_overcurrent => LeftWheelOvercurrent,
        is_right_wheel_overcurrent => RightWheelOvercurrent,
        is_low_side_driver0_overcurrent => LowSideDriver0Overcurrent,
        is_low_side_driver1_overcurrent => LowSideDriver1Overcurrent,
        is_low_side_driver2_overcurrent => LowSideDriver2Overcurrent,
        is_song_playing => SongPlaying,
        is_virtual_wall => VirtualWall,
        is_wall => Wall,
        is_wheel_drop_caster => WheelDropCaster,
        is_wheel_drop_left => WheelDropLeft,
        is_wheel_drop_right => WheelDropRight,
    }
}
