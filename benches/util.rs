/// Pins the calling thread to core `core` so a run doesn't migrate between caches halfway through.
/// Machines with fewer cores just run unpinned.
pub fn pin_thread_to_core(core: usize) {
    let Some(id) = core_affinity::get_core_ids().and_then(|ids| ids.into_iter().nth(core)) else {
        return;
    };

    if !core_affinity::set_for_current(id) {
        eprintln!("Failed to pin the benchmark thread to core {core}");
    }
}
