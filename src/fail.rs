use crate::tree::Tree;

#[cold]
#[inline(never)]
pub(crate) fn plant_into_self() -> ! {
    panic!("Cannot plant the forest into itself");
}

#[cold]
#[inline(never)]
pub(crate) fn uproot_not_planted(tree: &dyn Tree) -> ! {
    panic!("Cannot uproot tree which is not planted: {:?}", tree);
}
