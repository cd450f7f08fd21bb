#[doc(hidden)]
#[macro_export]
macro_rules! cfg_log {
    ($($item:item)*) => {
        $( #[cfg(feature = "bridge-log")] $item )*
    }
}
