use serde::{Deserialize, Serialize};

use crate::cursor::{ByteReader, ByteWriter};
use crate::errors::StageResult;
use crate::events::details::*;
use crate::traits::{StageDecode, StageEncode};

/// Fixed header preceding every item effect.
pub const ITEM_EFFECT_HEADER: u32 = 8;

tagged_details! {
    /// Payload of an item effect, selected by its discriminant byte
    pub enum ItemEffectDetails in "item effect" {
        1 => FlowChange(FlowChangeDetails),
        2 => StageClear(StageClearDetails),
        3 => GameWait(GameWaitDetails),
        4 => Message(MessageDetails),
        5 => Warp(WarpDetails),
        7 => StatusOperation(StatusOperationDetails),
        8 => StatusOperation2(StatusOperation2Details),
        9 => Disappearance(DisappearanceDetails),
        10 => ItemAcquisition(ItemAcquisitionDetails),
        11 => GraphicChange(GraphicChangeDetails),
        12 => AnimationSetChange(AnimationSetChangeDetails),
        13 => AnimationExecution(TimedDetails),
        14 => EffectExecution(EffectExecutionDetails),
        15 => CharacterEffectExecution(EffectPlaybackDetails),
        16 => ScreenEffectExecution(EffectPlaybackDetails),
        17 => PictureDisplay(PictureDisplayDetails),
        19 => BackgroundChange(TimedDetails),
        20 => SoundEffectPlayback(SoundEffectPlaybackDetails),
        21 => BgmPlayback(TimedDetails),
        22 => CodeExecution(CodeExecutionDetails),
        23 => Arrangement(ArrangementDetails),
        24 => Loop(LoopDetails),
    }
}

/// Effect applied when an item is acquired
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEffect {
    pub filler: i8,
    pub details: ItemEffectDetails,
}

impl ItemEffect {
    pub fn new(details: ItemEffectDetails) -> Self {
        ItemEffect { filler: 0, details }
    }
}

impl StageDecode for ItemEffect {
    fn decode(reader: &mut ByteReader) -> StageResult<Self> {
        reader.expect_header("item effect", ITEM_EFFECT_HEADER)?;
        let filler = reader.read_i8()?;
        let offset = reader.position();
        let discriminant = reader.read_u8()?;
        let details = ItemEffectDetails::decode_payload(discriminant, offset, reader)?;
        Ok(ItemEffect { filler, details })
    }
}

impl StageEncode for ItemEffect {
    fn encode(&self, writer: &mut ByteWriter) -> StageResult<()> {
        writer.write_u32(ITEM_EFFECT_HEADER);
        writer.write_i8(self.filler);
        writer.write_u8(self.details.discriminant());
        self.details.encode_payload(writer)
    }
}
