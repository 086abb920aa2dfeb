//! Signal wrapper emission and the subscription state machine.
//!
//! Each signal becomes a four-part unit: an unmarshaling trampoline, a
//! handler delegate, a backing multicast slot with its Callable, and an
//! event accessor implementing lazy connect / eager disconnect against the
//! engine's signal bus.

use gdwrap_api::MethodInfo;
use gdwrap_core::utils::{escape_reserved, to_camel_case};

use crate::classify::{SignalRecv, classify_signal_argument};
use crate::diagnostics::DiagnosticKind;

use super::context::ClassEmitter;
use super::naming::MemberRole;
use super::{BIND_METHOD, CAST_METHOD, STATIC_HELPER, TAB1, TAB2, TAB3, TAB4};

/// Connection state of a signal's subscription accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Unconnected,
    Connected,
}

/// Bus operation a subscription transition requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusAction {
    Register,
    Unregister,
}

/// The lazy-connect / eager-disconnect policy emitted into every
/// subscription accessor.
///
/// A declared signal costs a live bus connection only once someone
/// actually listens: the first `add` registers the trampoline's connection
/// object under the signal's interned native name, the last `remove`
/// disconnects it and clears the reference, in that order. The emitted C#
/// add/remove bodies are the realization of these transitions; modeling
/// them here keeps the invariant testable without string matching.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionFsm {
    state: ConnectionState,
    handlers: usize,
}

impl SubscriptionFsm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn handler_count(&self) -> usize {
        self.handlers
    }

    /// Add a handler, returning the bus action the transition requires.
    ///
    /// Registration happens exactly once, on the empty → non-empty edge;
    /// further adds only append to the backing slot.
    pub fn add(&mut self) -> Option<BusAction> {
        self.handlers += 1;
        match self.state {
            ConnectionState::Unconnected => {
                self.state = ConnectionState::Connected;
                Some(BusAction::Register)
            }
            ConnectionState::Connected => None,
        }
    }

    /// Remove a handler, returning the bus action the transition requires.
    ///
    /// `subscribed` mirrors multicast-removal semantics: removing a
    /// handler that was never added leaves the slot unchanged but still
    /// evaluates the post-removal emptiness check.
    pub fn remove(&mut self, subscribed: bool) -> Option<BusAction> {
        if subscribed && self.handlers > 0 {
            self.handlers -= 1;
        }
        if self.handlers == 0 && self.state == ConnectionState::Connected {
            self.state = ConnectionState::Unconnected;
            return Some(BusAction::Unregister);
        }
        None
    }
}

impl ClassEmitter<'_> {
    pub(super) fn emit_signals(&mut self) -> Result<(), crate::Error> {
        let class = self.class;
        if class.signals.is_empty() {
            return Ok(());
        }
        self.begin_region("Signals");
        for signal in &class.signals {
            self.emit_signal(signal)?;
        }
        self.end_region();
        Ok(())
    }

    fn emit_signal(&mut self, signal: &MethodInfo) -> Result<(), crate::Error> {
        if signal.name.is_empty() {
            self.diagnostics
                .report(
                    DiagnosticKind::MissingNativeName,
                    self.class.host_type_name(),
                    "<signal>",
                )
                .emit();
            return Ok(());
        }

        let name = self.claim_name(&signal.name, MemberRole::Signal)?;
        let camel = to_camel_case(&name);
        let delegate = format!("{name}Handler");
        let backing = format!("_{camel}_backing");
        let callable = format!("_{camel}_backing_callable");
        let signature_args = self.signature_arguments(&signal.arguments);

        self.emit_trampoline(signal, &camel, &backing, &signature_args);

        self.output.push_str(&format!(
            "{TAB1}public delegate void {delegate}({signature_args});\n\n"
        ));

        self.output.push_str(&format!(
            "{TAB1}private {delegate} {backing};\n\
             {TAB1}private Callable {callable};\n\n"
        ));

        let cached = self.intern_native_name(&signal.name);
        self.emit_accessor(&name, &delegate, &camel, &backing, &callable, &cached);
        Ok(())
    }

    /// The unmarshaling trampoline: convert each received argument, then
    /// forward the typed values to the backing slot.
    fn emit_trampoline(
        &mut self,
        signal: &MethodInfo,
        camel: &str,
        backing: &str,
        signature_args: &str,
    ) {
        self.output.push_str(&format!(
            "{TAB1}private void {camel}Call({signature_args})\n{TAB1}{{\n"
        ));

        let tables = self.tables;
        let mut forwarded = Vec::with_capacity(signal.arguments.len());
        let mut body = String::new();
        for (index, argument) in signal.arguments.iter().enumerate() {
            let received = escape_reserved(&to_camel_case(&argument.name));
            let converted = match classify_signal_argument(argument, tables) {
                SignalRecv::Rebind { class_name } => {
                    format!("{STATIC_HELPER}.{BIND_METHOD}<{class_name}>({received})")
                }
                SignalRecv::ElementRebind { element } => {
                    format!("{STATIC_HELPER}.{CAST_METHOD}<{element}>({received})")
                }
                SignalRecv::Passthrough => received,
            };
            body.push_str(&format!("{TAB2}var arg{index} = {converted};\n"));
            forwarded.push(format!("arg{index}"));
        }
        self.output.push_str(&body);

        self.output.push_str(&format!(
            "{TAB2}{backing}?.Invoke({});\n{TAB1}}}\n\n",
            forwarded.join(", ")
        ));
    }

    /// The event accessor implementing the [`SubscriptionFsm`] policy:
    /// first add registers the connection object before appending, last
    /// remove disconnects before clearing it.
    fn emit_accessor(
        &mut self,
        name: &str,
        delegate: &str,
        camel: &str,
        backing: &str,
        callable: &str,
        cached: &str,
    ) {
        self.output.push_str(&format!(
            "{TAB1}public event {delegate} {name}\n\
             {TAB1}{{\n\
             {TAB2}add\n\
             {TAB2}{{\n\
             {TAB3}if ({backing} == null)\n\
             {TAB3}{{\n\
             {TAB4}{callable} = new Callable(this, MethodName.{camel}Call);\n\
             {TAB4}Connect({cached}, {callable});\n\
             {TAB3}}}\n\
             \n\
             {TAB3}{backing} += value;\n\
             {TAB2}}}\n\
             {TAB2}remove\n\
             {TAB2}{{\n\
             {TAB3}{backing} -= value;\n\
             \n\
             {TAB3}if ({backing} == null)\n\
             {TAB3}{{\n\
             {TAB4}Disconnect({cached}, {callable});\n\
             {TAB4}{callable} = default;\n\
             {TAB3}}}\n\
             {TAB2}}}\n\
             {TAB1}}}\n\n"
        ));
    }
}
