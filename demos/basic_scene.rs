use hub_scene::*;

const FRAME: f64 = 1.0 / 60.0;

fn main() {
    let mut engine = SceneEngine::new(SessionProfile::desktop(), 7);

    let bounds = Aabb::new(Vec3::splat(-0.5), Vec3::splat(0.5));
    for model in ["logo", "work", "about", "contact", "eye"] {
        engine.load_model(model, bounds);
    }
    engine.install_hub("logo").expect("hub model loaded");

    engine.enqueue(PendingDescriptor::new("work", "work", 28.0, 10.0).anchored(Vec3::new(
        0.3, 0.4, -0.6,
    )));
    engine.enqueue(PendingDescriptor::new("about", "about", 16.0, 1.0).anchored(Vec3::new(
        -1.4, 0.0, 0.8,
    )));
    engine.enqueue(PendingDescriptor::new("contact", "contact", 12.0, 1.0).anchored(
        Vec3::new(1.5, 0.0, 1.0),
    ));
    engine.enqueue(
        PendingDescriptor::new("eye", "eye", 8.0, 40.0)
            .floating()
            .with_impulses(vec![Vec3::new(120.0, -80.0, 60.0)]),
    );

    // First click unlocks the introduction sequence.
    engine.interact();

    for frame in 0..240 {
        let report = engine
            .tick(frame as f64 * FRAME)
            .expect("simulation stays finite");
        if let Introduction::Introduced(name) = report.introduction {
            println!("frame {frame}: introduced '{name}'");
        }
    }

    println!("\nfinal transforms:");
    for object in engine.registry().entries() {
        let p = object.mesh.transform.position;
        println!("  {:<8} ({:+.3}, {:+.3}, {:+.3})", object.name, p.x, p.y, p.z);
    }
}
