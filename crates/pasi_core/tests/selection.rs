use pasi_core::{resolve_selection, FileHandle};

fn file(name: &str, bytes: u64) -> FileHandle {
    FileHandle::new(name, bytes, format!("/uploads/{name}"))
}

#[test]
fn nothing_selected_when_both_lists_empty() {
    assert_eq!(resolve_selection(&[], &[]), None);
}

#[test]
fn picker_file_is_used() {
    let f = file("a.jpg", 10);
    assert_eq!(resolve_selection(&[f.clone()], &[]), Some(f));
}

#[test]
fn dropped_file_is_used_when_picker_empty() {
    let g = file("g.png", 10);
    assert_eq!(resolve_selection(&[], &[g.clone()]), Some(g));
}

#[test]
fn first_acceptable_file_wins() {
    let bad = file("bad.jpg", 0);
    let good = file("good.jpg", 1024);
    let later = file("later.jpg", 2048);
    assert_eq!(
        resolve_selection(&[bad, good.clone(), later], &[]),
        Some(good)
    );
}

#[test]
fn non_empty_picker_shadows_drop_list() {
    let f1 = file("f1.jpg", 10);
    let f2 = file("f2.jpg", 20);
    let f3 = file("f3.jpg", 30);
    assert_eq!(
        resolve_selection(&[f1.clone(), f2], &[f3.clone()]),
        Some(f1)
    );

    // Even an all-unacceptable picker list does not fall through to the drop list.
    let empty = file("", 10);
    let zero = file("zero.jpg", 0);
    assert_eq!(resolve_selection(&[empty, zero], &[f3]), None);
}

#[test]
fn no_acceptable_dropped_file_yields_none() {
    assert_eq!(resolve_selection(&[], &[file("", 5), file("x.jpg", 0)]), None);
}
