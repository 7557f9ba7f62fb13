use delegate_core::{Class, Member};

use crate::AccessorTriple;

/// Bind `exposed_name` on `class` to a property wired to `triple`.
///
/// Whatever member previously had that name (method, class attribute or an
/// earlier property) is replaced without complaint. Instance fields of the
/// same name stay stored but become unreachable through attribute access.
pub fn install(class: &Class, exposed_name: &str, triple: AccessorTriple) {
    crate::debug!(
        class = class.name(),
        name = exposed_name,
        path = %triple.steps(),
        replaces = ?class.member(exposed_name).as_ref().map(Member::kind),
        "installing delegated property"
    );
    class.set_member(exposed_name, Member::Property(triple.into_property()));
}
