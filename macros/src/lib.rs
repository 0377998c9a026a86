mod test_attr;

use darling::ast::NestedMeta;
use darling::{Error, FromMeta};
use syn::ItemFn;
extern crate proc_macro;

/// A proc macro attribute for writing tests against a Swift compatible cluster.
///
/// This macro extends the `#[tokio::test]` attribute. It builds a `TestContext` from the
/// `SWIFT_*` environment variables, creates a container for the test if needed and
/// deletes it, with its objects, once the test is done. When no cluster is configured
/// the test prints a notice and returns.
///
/// By default, it requires the test function to have two parameters:
///
/// - `ctx: TestContext` - The test context which gives access to a `SwiftClient`.
/// - `container: String` - The name of the container to be used in the test.
///
/// ```no_run
/// use snappy_common::test_context::TestContext;
/// #[snappy_macros::test]
/// async fn my_test(ctx: TestContext, container: String) {
///    // Your test code here
/// }
/// ```
///
/// If the `no_container` argument is provided, the test function must have only one parameter:
///
/// ```no_run
/// use snappy_common::test_context::TestContext;
/// #[snappy_macros::test(no_container)]
/// async fn my_test(ctx: TestContext) {
///    // Your test code here
/// }
///```
/// The macro also supports additional arguments:
///
/// - `flavor`: Specifies the flavor of the Tokio test (e.g., "multi_thread").
/// - `worker_threads`: Specifies the number of worker threads for the Tokio test.
/// - `no_cleanup`: Keeps the container after the test.
/// - `features`: Space separated features the cluster must support; the test is skipped otherwise.
/// ```no_run
/// use snappy_common::test_context::TestContext;
/// #[snappy_macros::test(features = "tempurl")]
/// async fn my_test(ctx: TestContext, container: String) {
///    // this test will not run if the cluster does not publish `tempurl`
/// }
/// ```
#[proc_macro_attribute]
pub fn test(
    args: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    // Parse the function
    let input_fn = match syn::parse::<ItemFn>(input.clone()) {
        Ok(input_fn) => input_fn,
        Err(err) => return err.to_compile_error().into(),
    };

    // Parse the macro arguments
    let attr_args = match NestedMeta::parse_meta_list(args.into()) {
        Ok(v) => v,
        Err(e) => return Error::from(e).write_errors().into(),
    };

    let args = match test_attr::MacroArgs::from_list(&attr_args) {
        Ok(v) => v,
        Err(e) => return e.write_errors().into(),
    };

    // Validate the function arguments
    if let Err(err) = args.validate(&input_fn) {
        return err;
    }

    // Expand the macro
    match test_attr::expand_test_macro(args, input_fn) {
        Ok(expanded) => expanded.into(),
        Err(err) => err.into(),
    }
}
