use std::{cell::RefCell, rc::Rc};

use super::*;

#[derive(Clone, Default)]
struct RecordingSynth {
    log: Rc<RefCell<Vec<String>>>,
}

impl SpeechSynth for RecordingSynth {
    fn speak(&mut self, utterance: &Utterance) -> MemeframeResult<()> {
        self.log.borrow_mut().push(format!(
            "speak text={:?} voice={:?} volume={}",
            utterance.text, utterance.voice_name, utterance.volume01
        ));
        Ok(())
    }

    fn cancel_current(&mut self) {
        self.log.borrow_mut().push("cancel".to_string());
    }
}

fn controller() -> (StudioController, Rc<RefCell<Vec<String>>>) {
    let synth = RecordingSynth::default();
    let log = synth.log.clone();
    let frame = Frame::new(400.0, 400.0).unwrap();
    (StudioController::new(frame, Box::new(synth)), log)
}

fn voices() -> Vec<Voice> {
    vec![
        Voice {
            name: "Alice".to_string(),
            language: "en-US".to_string(),
            is_default: true,
        },
        Voice {
            name: "Bob".to_string(),
            language: "en-GB".to_string(),
            is_default: false,
        },
    ]
}

#[test]
fn starts_empty_with_everything_disabled() {
    let (ctl, _) = controller();
    assert_eq!(ctl.stage(), CaptionStage::Empty);
    let controls = ctl.controls();
    assert!(!controls.generate && !controls.clear && !controls.read_aloud);
    assert!(ctl.placement().is_none());
}

#[test]
fn decode_completion_loads_the_image_and_places_it() {
    let (mut ctl, _) = controller();
    let token = ctl.on_upload_changed();
    let placement = ctl
        .on_image_decoded(token, ContentSize::new(800.0, 400.0).unwrap())
        .unwrap();

    assert_eq!(ctl.stage(), CaptionStage::ImageLoaded);
    assert!(ctl.controls().generate);
    assert_eq!(placement.width, 400.0);
    assert_eq!(placement.height, 200.0);
    assert_eq!(placement.start_y, 100.0);
}

#[test]
fn stale_decode_is_dropped_and_newest_wins() {
    let (mut ctl, _) = controller();
    let first = ctl.on_upload_changed();
    let second = ctl.on_upload_changed();

    assert!(
        ctl.on_image_decoded(first, ContentSize::new(100.0, 100.0).unwrap())
            .is_none()
    );
    assert_eq!(ctl.stage(), CaptionStage::Empty);
    assert!(ctl.content().is_none());

    assert!(
        ctl.on_image_decoded(second, ContentSize::new(400.0, 800.0).unwrap())
            .is_some()
    );
    assert_eq!(ctl.content().unwrap().aspect_ratio(), 0.5);
}

#[test]
fn out_of_order_completions_keep_the_newest_image() {
    let (mut ctl, _) = controller();
    let first = ctl.on_upload_changed();
    let second = ctl.on_upload_changed();

    // The newest upload decodes first; the older one lands afterwards and
    // must not clobber it.
    assert!(
        ctl.on_image_decoded(second, ContentSize::new(400.0, 800.0).unwrap())
            .is_some()
    );
    assert!(
        ctl.on_image_decoded(first, ContentSize::new(100.0, 100.0).unwrap())
            .is_none()
    );
    assert_eq!(ctl.content().unwrap().aspect_ratio(), 0.5);
}

#[test]
fn generate_then_clear_round_trips_the_stage() {
    let (mut ctl, _) = controller();
    let token = ctl.on_upload_changed();
    ctl.on_image_decoded(token, ContentSize::new(400.0, 400.0).unwrap());

    ctl.on_generate_clicked().unwrap();
    assert_eq!(ctl.stage(), CaptionStage::Captioned);
    assert!(ctl.controls().clear && ctl.controls().read_aloud);
    assert!(ctl.on_generate_clicked().is_err());

    ctl.on_clear_clicked().unwrap();
    assert_eq!(ctl.stage(), CaptionStage::ImageLoaded);
    assert!(ctl.controls().generate);
    assert!(ctl.on_clear_clicked().is_err());
}

#[test]
fn generate_without_an_image_is_rejected() {
    let (mut ctl, _) = controller();
    assert!(ctl.on_generate_clicked().is_err());
}

#[test]
fn read_aloud_cancels_then_speaks_the_concatenated_caption() {
    let (mut ctl, log) = controller();
    let token = ctl.on_upload_changed();
    ctl.on_image_decoded(token, ContentSize::new(400.0, 400.0).unwrap());
    ctl.on_top_text_changed("TOP");
    ctl.on_bottom_text_changed("BOTTOM");
    ctl.on_roster_changed(&voices());
    ctl.on_voice_selected("Bob");
    ctl.on_volume_changed(VolumeLevel::new(50).unwrap());
    ctl.on_generate_clicked().unwrap();

    ctl.on_read_aloud_clicked().unwrap();
    assert_eq!(
        log.borrow().as_slice(),
        [
            "cancel".to_string(),
            "speak text=\"TOPBOTTOM\" voice=Some(\"Bob\") volume=0.5".to_string(),
        ]
    );
}

#[test]
fn read_aloud_before_generate_is_rejected_and_silent() {
    let (mut ctl, log) = controller();
    let token = ctl.on_upload_changed();
    ctl.on_image_decoded(token, ContentSize::new(400.0, 400.0).unwrap());

    assert!(ctl.on_read_aloud_clicked().is_err());
    assert!(log.borrow().is_empty());
}

#[test]
fn read_aloud_with_an_empty_roster_uses_the_default_voice() {
    let (mut ctl, log) = controller();
    let token = ctl.on_upload_changed();
    ctl.on_image_decoded(token, ContentSize::new(400.0, 400.0).unwrap());
    ctl.on_top_text_changed("HI");
    ctl.on_generate_clicked().unwrap();

    ctl.on_read_aloud_clicked().unwrap();
    assert!(log.borrow()[1].contains("voice=None"));
}

#[test]
fn roster_notifications_are_idempotent_through_the_controller() {
    let (mut ctl, _) = controller();
    ctl.on_roster_changed(&voices());
    ctl.on_roster_changed(&voices());
    assert_eq!(ctl.roster().entries().len(), 2);
    assert_eq!(ctl.roster().selected().unwrap().name, "Alice");
}

#[test]
fn volume_changes_report_the_icon_tier() {
    let (mut ctl, _) = controller();
    assert_eq!(
        ctl.on_volume_changed(VolumeLevel::new(0).unwrap()),
        VolumeTier::Mute
    );
    assert_eq!(
        ctl.on_volume_changed(VolumeLevel::new(70).unwrap()),
        VolumeTier::High
    );
    assert_eq!(ctl.volume().value(), 70);
}
