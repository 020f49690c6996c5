#![no_main]
use libfuzzer_sys::fuzz_target;
use minexi::name_table::{PrepopulatedNameTable, RuntimeNameTable};

fuzz_target!(|data: &[u8]| {
    // Interpret input bytes as an operation script against a small table and
    // check the identifier-assignment invariants after every step.
    let prepopulated = PrepopulatedNameTable::new(&[3, 0, 1]);
    let mut runtime = RuntimeNameTable::new(24);
    let mut next_uri_id = prepopulated.uri_count();

    for &op in data {
        match op % 4 {
            0 => {
                if let Ok(uri_id) = runtime.add_uri(&prepopulated) {
                    // Monoton, lückenlos
                    assert_eq!(uri_id, next_uri_id);
                    next_uri_id += 1;
                }
            }
            1 => {
                let uri_id = (op / 4) as usize % (runtime.uri_count(&prepopulated) + 1);
                let before = runtime.local_name_count(&prepopulated, uri_id);
                match runtime.add_local_name(&prepopulated, uri_id) {
                    Ok(id) => {
                        assert_eq!(Some(id), before.ok());
                        assert_eq!(
                            runtime.local_name_count(&prepopulated, uri_id).unwrap(),
                            id + 1
                        );
                    }
                    Err(_) => {
                        // Fehlgeschlagene Aufrufe mutieren nichts
                        assert_eq!(
                            runtime.local_name_count(&prepopulated, uri_id).ok(),
                            before.ok()
                        );
                    }
                }
            }
            2 => {
                let _ = runtime.local_name_count(&prepopulated, (op / 4) as usize);
            }
            _ => {
                runtime.reset();
                next_uri_id = prepopulated.uri_count();
            }
        }
        assert_eq!(
            runtime.entries().len(),
            runtime.added_uri_entries() + runtime.added_local_name_entries()
        );
    }
});
