use serde::{Deserialize, Serialize};

use crate::cursor::{ByteReader, ByteWriter};
use crate::errors::StageResult;
use crate::events::command_details::*;
use crate::events::details::*;
use crate::traits::{StageDecode, StageEncode};

/// Fixed header preceding every command.
pub const COMMAND_HEADER: u32 = 8;

tagged_details! {
    /// Payload of a flow command, selected by its discriminant byte
    ///
    /// Discriminants 1 to 16 are command-only shapes; from 17 on the table
    /// reuses the payloads item effects carry.
    pub enum CommandDetails in "command" {
        1 => Wait(WaitDetails),
        2 => LinearMovement(LinearMovementDetails),
        3 => GroundMovement(MovementDetails),
        4 => CircularMovement(MovementDetails),
        5 => ChargeMovement(MovementDetails),
        6 => GuidedMovement(MovementDetails),
        7 => ScreenOutsideAvoidanceMovement(MovementDetails),
        8 => MovementInvalidation(MovementDetails),
        9 => DirectionChange(DirectionChangeDetails),
        10 => Jump(JumpDetails),
        11 => Shot(ShotDetails),
        12 => Sword(SwordDetails),
        13 => BlockSummon(ActorSummonDetails),
        14 => CharacterSummon(ActorSummonDetails),
        15 => ItemSummon(SummonDetails),
        16 => FlowOperation(FlowOperationDetails),
        17 => StageClear(StageClearDetails),
        18 => GameWait(GameWaitDetails),
        19 => Message(MessageDetails),
        20 => Warp(WarpDetails),
        21 => TargetSetting(TargetSettingDetails),
        22 => StatusOperation(StatusOperationDetails),
        23 => StatusOperation2(StatusOperation2Details),
        24 => Disappearance(DisappearanceDetails),
        25 => ItemAcquisition(ItemAcquisitionDetails),
        26 => GraphicChange(GraphicChangeDetails),
        27 => AnimationSetChange(AnimationSetChangeDetails),
        28 => AnimationExecution(TimedDetails),
        29 => EffectExecution(EffectExecutionDetails),
        30 => CharacterEffectExecution(EffectPlaybackDetails),
        31 => ScreenEffectExecution(EffectPlaybackDetails),
        32 => PictureDisplay(PictureDisplayDetails),
        34 => BackgroundChange(TimedDetails),
        35 => SoundEffectPlayback(SoundEffectPlaybackDetails),
        36 => BgmPlayback(TimedDetails),
        37 => CodeExecution(CodeExecutionDetails),
        38 => Arrangement(ArrangementDetails),
        39 => Loop(LoopDetails),
    }
}

/// One step of a flow's script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub filler: i8,
    pub details: CommandDetails,
}

impl Command {
    pub fn new(details: CommandDetails) -> Self {
        Command { filler: 0, details }
    }
}

impl StageDecode for Command {
    fn decode(reader: &mut ByteReader) -> StageResult<Self> {
        reader.expect_header("command", COMMAND_HEADER)?;
        let filler = reader.read_i8()?;
        let offset = reader.position();
        let discriminant = reader.read_u8()?;
        let details = CommandDetails::decode_payload(discriminant, offset, reader)?;
        Ok(Command { filler, details })
    }
}

impl StageEncode for Command {
    fn encode(&self, writer: &mut ByteWriter) -> StageResult<()> {
        writer.write_u32(COMMAND_HEADER);
        writer.write_i8(self.filler);
        writer.write_u8(self.details.discriminant());
        self.details.encode_payload(writer)
    }
}
