/// Builds a [`Document`](crate::Document) from a literal description.
///
/// Each section is a name followed by a braced list of `key => value` pairs.
/// Keys and section names may be any expression convertible into `String`;
/// values anything convertible into [`Value`](crate::Value).
///
/// # Examples
///
/// ```rust
/// use inifile::ini;
///
/// let doc = ini! {
///     "server" => {
///         "host" => "localhost",
///         "port" => 8080,
///     },
///     "client" => {
///         "retries" => 3,
///         "verbose" => true,
///     },
/// };
///
/// assert_eq!(doc["server"]["port"], "8080");
/// assert_eq!(doc["client"]["verbose"].to::<bool>(), Ok(true));
/// ```
///
/// An empty section is created as well, but it follows the usual rules on
/// encode:
///
/// ```rust
/// use inifile::ini;
///
/// let doc = ini! { "empty" => {} };
/// assert!(doc.contains_section("empty"));
/// assert_eq!(doc.to_string(), "");
/// ```
#[macro_export]
macro_rules! ini {
    // Handle empty document
    () => {
        $crate::Document::new()
    };

    // Handle sections
    ($( $section:expr => { $( $key:expr => $value:expr ),* $(,)? } ),+ $(,)?) => {{
        let mut document = $crate::Document::new();
        $(
            #[allow(unused_variables)]
            let section = document.section_mut($section);
            $(
                section.insert($key, $value);
            )*
        )+
        document
    }};
}
