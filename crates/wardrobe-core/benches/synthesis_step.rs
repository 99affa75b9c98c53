use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wardrobe_core::{
    synthesize, BlendWeightState, Config, Frame, FrameEntry, FrameSequence, MaterialState, NodeId,
    ObjectState, SceneModel,
};

fn build_scene(object_count: usize) -> (SceneModel, Vec<NodeId>) {
    let mut scene = SceneModel::new();
    let root = scene.add_root("Avatar");
    let mut nodes = Vec::with_capacity(object_count);
    for i in 0..object_count {
        let node = scene.add_child(root, format!("Part{i}"));
        scene.set_material_slots(node, 4);
        nodes.push(node);
    }
    (scene, nodes)
}

fn build_sequence(nodes: &[NodeId], frame_count: usize) -> FrameSequence {
    let frames = (0..frame_count)
        .map(|f| Frame {
            entries: nodes
                .iter()
                .enumerate()
                .flat_map(|(i, node)| {
                    [
                        FrameEntry::Object(ObjectState {
                            target: Some(*node),
                            active: (f + i) % 2 == 0,
                        }),
                        FrameEntry::Material(MaterialState {
                            target: Some(*node),
                            slot: (i % 4) as u32,
                            active_material: format!("mat_{f}_{i}"),
                            base_material: format!("base_{i}"),
                        }),
                        FrameEntry::BlendWeight(BlendWeightState {
                            target: Some(*node),
                            property: format!("shape_{i}"),
                            value: f as f32 / frame_count as f32,
                        }),
                    ]
                })
                .collect(),
        })
        .collect();
    FrameSequence {
        name: "bench".to_string(),
        output_location: "generated".to_string(),
        frames,
    }
}

fn bench_synthesize(c: &mut Criterion) {
    let cfg = Config::default();

    let (scene, nodes) = build_scene(16);
    let linear = build_sequence(&nodes, 8);
    c.bench_function("linear_16_objects_8_frames", |b| {
        b.iter(|| synthesize(black_box(&linear), &scene, &cfg).unwrap())
    });

    let ab = build_sequence(&nodes, 2);
    c.bench_function("ab_16_objects", |b| {
        b.iter(|| synthesize(black_box(&ab), &scene, &cfg).unwrap())
    });
}

criterion_group!(benches, bench_synthesize);
criterion_main!(benches);
