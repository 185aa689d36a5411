use vmd_motion::vmd::layout::{COUNT_LEN, HEADER_LEN, MAGIC, MAGIC_LEN, MODEL_NAME_LEN};
use vmd_motion::vmd::text;
use vmd_motion::{
    BoneFrame, CameraFrame, FrameKind, IkState, LightFrame, MorphFrame, ShadowFrame,
    ShowIkFrame, VmdError, VmdHeader, VmdMotion,
};

fn bone(name: &str, frame: u32) -> BoneFrame {
    BoneFrame {
        name: text::encode_fixed(name),
        frame,
        position: [0.0, 1.0, -0.5],
        rotation: [0.0, 0.0, 0.0, 1.0],
        interpolation: [0x6B; 64],
    }
}

/// A motion exercising every track, with keyframes deliberately out of
/// frame order.
fn sample_motion() -> VmdMotion {
    let mut motion = VmdMotion::new(VmdHeader::for_model("初音ミク"));
    motion.bone_frames = vec![bone("センター", 30), bone("右腕", 0), bone("左腕", 30)];
    motion.morph_frames = vec![
        MorphFrame {
            name: text::encode_fixed("まばたき"),
            frame: 12,
            weight: 1.0,
        },
        MorphFrame {
            name: text::encode_fixed("まばたき"),
            frame: 4,
            weight: 0.0,
        },
    ];
    motion.camera_frames = vec![CameraFrame {
        frame: 0,
        distance: -45.0,
        target: [0.0, 10.0, 0.0],
        rotation: [0.0, 0.0, 0.0],
        interpolation: [0x14; 24],
        view_angle: 30,
        perspective: 0,
    }];
    motion.light_frames = vec![LightFrame {
        frame: 0,
        color: [0.6, 0.6, 0.6],
        position: [-0.5, -1.0, 0.5],
    }];
    motion.shadow_frames = vec![ShadowFrame {
        frame: 8,
        mode: 1,
        distance: 0.0985,
    }];
    motion.show_ik_frames = vec![
        ShowIkFrame {
            frame: 20,
            visible: 1,
            ik_states: vec![
                IkState {
                    name: text::encode_fixed("右足ＩＫ"),
                    enabled: 0,
                },
                IkState {
                    name: text::encode_fixed("左足ＩＫ"),
                    enabled: 1,
                },
            ],
        },
        ShowIkFrame {
            frame: 0,
            visible: 1,
            ik_states: Vec::new(),
        },
    ];
    motion
}

#[test]
fn round_trip_preserves_the_document() {
    let motion = sample_motion();
    let decoded = VmdMotion::from_bytes(&motion.to_bytes()).expect("decode");
    assert_eq!(decoded, motion);
}

#[test]
fn re_encoding_a_decoded_motion_is_byte_identical() {
    let bytes = sample_motion().to_bytes();
    let decoded = VmdMotion::from_bytes(&bytes).expect("decode");
    assert_eq!(decoded.to_bytes(), bytes);
    assert_eq!(decoded.encoded_len(), bytes.len());
}

#[test]
fn empty_motion_encodes_to_header_plus_zero_counts() {
    let motion = VmdMotion::new(VmdHeader::for_camera());
    let bytes = motion.to_bytes();
    assert_eq!(bytes.len(), HEADER_LEN + 6 * COUNT_LEN);

    let decoded = VmdMotion::from_bytes(&bytes).expect("decode");
    assert_eq!(decoded.total_frames(), 0);
    for kind in FrameKind::ALL {
        assert_eq!(decoded.frame_count(kind), 0);
    }
    assert_eq!(decoded.header.model_name_text(), "カメラ・照明");
}

#[test]
fn hand_built_buffer_decodes_field_by_field() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(MAGIC);
    let name: [u8; MODEL_NAME_LEN] = text::encode_fixed("Miku");
    bytes.extend_from_slice(&name);
    bytes.extend_from_slice(&0u32.to_le_bytes()); // bones
    // one morph record
    bytes.extend_from_slice(&1u32.to_le_bytes());
    bytes.extend_from_slice(&text::encode_fixed::<15>("smile"));
    bytes.extend_from_slice(&250u32.to_le_bytes());
    bytes.extend_from_slice(&0.75f32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes()); // cameras
    // one light record
    bytes.extend_from_slice(&1u32.to_le_bytes());
    bytes.extend_from_slice(&3u32.to_le_bytes());
    for v in [0.6f32, 0.6, 0.6, -0.5, -1.0, 0.5] {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    bytes.extend_from_slice(&0u32.to_le_bytes()); // shadows
    bytes.extend_from_slice(&0u32.to_le_bytes()); // show/IK

    let motion = VmdMotion::from_bytes(&bytes).expect("decode");
    assert_eq!(motion.header.model_name_text(), "Miku");
    assert_eq!(motion.morph_frames.len(), 1);
    assert_eq!(motion.morph_frames[0].name_text(), "smile");
    assert_eq!(motion.morph_frames[0].frame, 250);
    assert_eq!(motion.morph_frames[0].weight, 0.75);
    assert_eq!(motion.light_frames.len(), 1);
    assert_eq!(motion.light_frames[0].frame, 3);
    assert_eq!(motion.light_frames[0].color, [0.6, 0.6, 0.6]);
    assert_eq!(motion.light_frames[0].position, [-0.5, -1.0, 0.5]);
}

#[test]
fn corrupted_magic_is_rejected() {
    let bytes = sample_motion().to_bytes();
    for i in [0, 8, 24, MAGIC_LEN - 1] {
        let mut corrupted = bytes.clone();
        corrupted[i] = corrupted[i].wrapping_add(1);
        match VmdMotion::from_bytes(&corrupted) {
            Err(VmdError::InvalidMagic { .. }) => {}
            other => panic!("byte {} accepted: {:?}", i, other),
        }
    }
}

#[test]
fn count_overrunning_the_buffer_is_a_truncation_error() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(MAGIC);
    bytes.extend_from_slice(&[0u8; MODEL_NAME_LEN]);
    bytes.extend_from_slice(&10u32.to_le_bytes()); // 10 bones declared, none present
    match VmdMotion::from_bytes(&bytes) {
        Err(VmdError::Truncated { section, .. }) => assert_eq!(section, "bone track"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn sorting_orders_each_track_by_unsigned_frame() {
    let mut motion = sample_motion();
    motion.morph_frames.push(MorphFrame {
        name: text::encode_fixed("extreme"),
        frame: 0xFFFF_FFFF,
        weight: 0.5,
    });
    motion.morph_frames.push(MorphFrame {
        name: text::encode_fixed("extreme"),
        frame: 0x0000_0001,
        weight: 0.5,
    });
    motion.sort_all_frames();

    for kind in FrameKind::ALL {
        let frames: Vec<u32> = match kind {
            FrameKind::Bone => motion.bone_frames.iter().map(|f| f.frame).collect(),
            FrameKind::Morph => motion.morph_frames.iter().map(|f| f.frame).collect(),
            FrameKind::Camera => motion.camera_frames.iter().map(|f| f.frame).collect(),
            FrameKind::Light => motion.light_frames.iter().map(|f| f.frame).collect(),
            FrameKind::Shadow => motion.shadow_frames.iter().map(|f| f.frame).collect(),
            FrameKind::ShowIk => motion.show_ik_frames.iter().map(|f| f.frame).collect(),
        };
        assert!(
            frames.windows(2).all(|w| w[0] <= w[1]),
            "{} track not ascending: {:?}",
            kind,
            frames
        );
    }
    assert_eq!(motion.morph_frames.last().unwrap().frame, 0xFFFF_FFFF);
}

#[test]
fn sorting_moves_whole_records() {
    let mut motion = VmdMotion::default();
    motion.bone_frames = vec![bone("late", 90), bone("early", 10)];
    motion.sort_category(FrameKind::Bone);
    assert_eq!(motion.bone_frames[0].name_text(), "early");
    assert_eq!(motion.bone_frames[1].name_text(), "late");
}

#[test]
fn sorted_motion_still_round_trips() {
    let mut motion = sample_motion();
    motion.sort_all_frames();
    let decoded = VmdMotion::from_bytes(&motion.to_bytes()).expect("decode");
    assert_eq!(decoded, motion);
}

#[test]
fn save_and_load_through_the_filesystem() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("sample.vmd");

    let motion = sample_motion();
    motion.save(&path).expect("save");
    let loaded = VmdMotion::load(&path).expect("load");
    assert_eq!(loaded, motion);
}

#[test]
fn loading_a_non_vmd_file_fails_with_invalid_magic() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("not-a-motion.txt");
    std::fs::write(&path, b"this is definitely not motion data, not even close").unwrap();
    match VmdMotion::load(&path) {
        Err(VmdError::InvalidMagic { .. }) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn loading_a_missing_file_fails_with_io() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.vmd");
    match VmdMotion::load(&path) {
        Err(VmdError::Io(_)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn csv_rows_follow_sorted_order() {
    let mut motion = sample_motion();
    motion.sort_all_frames();
    let rows: Vec<_> = motion.iter_morph_rows().collect();
    assert_eq!(rows.len(), motion.morph_frames.len());
    assert_eq!(rows[0].frame, 4);
    assert_eq!(rows[0].name, "まばたき");
    assert!(rows.windows(2).all(|w| w[0].frame <= w[1].frame));
}
