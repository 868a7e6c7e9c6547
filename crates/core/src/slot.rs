//! Slot signatures, typed implementations and their erased form
//!
//! Each slot a system exposes is described by a signature type implementing
//! [`SlotSignature`], which fixes the owning `(system_id, slot_name)` pair and
//! the `Input -> Output` shape at the type level. A concrete algorithm is a
//! [`SlotImplementation<S>`]: identity, version and compatibility metadata
//! plus a plain function pointer, so it can live in a `static`.
//!
//! The registry stores implementations as [`ErasedSlot`] trait objects. The
//! erased interface keeps dynamic lookup by id, offers a JSON entry point for
//! consumers that only know an id, and can be downcast back to the typed
//! implementation when the caller knows the signature.

use std::any::{Any, TypeId};
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::context::SlotContext;
use crate::error::SlotError;
use crate::types::SlotOwner;
use crate::version::{Compatibility, Version};

/// Type-level description of one slot
pub trait SlotSignature: 'static {
    const SYSTEM_ID: &'static str;
    const SLOT_NAME: &'static str;
    type Input: DeserializeOwned;
    type Output: Serialize;

    fn owner() -> SlotOwner {
        SlotOwner::new(Self::SYSTEM_ID, Self::SLOT_NAME)
    }
}

/// Declare a slot signature type
///
/// ```ignore
/// slot_signature! {
///     /// Rotation policy
///     pub RotationRule: "tetris", "rotationRule" => RotationInput => RotationOutput
/// }
/// ```
#[macro_export]
macro_rules! slot_signature {
    ($(#[$meta:meta])* $vis:vis $name:ident: $system:expr, $slot:expr => $input:ty => $output:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis struct $name;

        impl $crate::slot::SlotSignature for $name {
            const SYSTEM_ID: &'static str = $system;
            const SLOT_NAME: &'static str = $slot;
            type Input = $input;
            type Output = $output;
        }
    };
}

/// Function run by an implementation of signature `S`
pub type RunFn<S> = fn(
    &mut SlotContext,
    &<S as SlotSignature>::Input,
) -> <S as SlotSignature>::Output;

/// A named, versioned algorithm bound to the slot described by `S`
pub struct SlotImplementation<S: SlotSignature> {
    id: &'static str,
    version: Version,
    compatible_with: &'static [Compatibility],
    run: RunFn<S>,
}

impl<S: SlotSignature> SlotImplementation<S> {
    pub const fn new(
        id: &'static str,
        version: Version,
        compatible_with: &'static [Compatibility],
        run: RunFn<S>,
    ) -> Self {
        Self {
            id,
            version,
            compatible_with,
            run,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn owner(&self) -> SlotOwner {
        S::owner()
    }

    pub fn compatible_with(&self) -> &'static [Compatibility] {
        self.compatible_with
    }

    /// Run the algorithm
    pub fn run(&self, ctx: &mut SlotContext, input: &S::Input) -> S::Output {
        (self.run)(ctx, input)
    }

    /// Box this implementation for insertion into a registry
    pub fn boxed(&self) -> BoxedSlot {
        Box::new(*self)
    }
}

impl<S: SlotSignature> Clone for SlotImplementation<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: SlotSignature> Copy for SlotImplementation<S> {}

impl<S: SlotSignature> fmt::Debug for SlotImplementation<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotImplementation")
            .field("id", &self.id)
            .field("version", &self.version)
            .field("owner", &S::owner())
            .field("compatible_with", &self.compatible_with)
            .finish()
    }
}

/// Serializable summary of a registered implementation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotDescriptor {
    pub id: &'static str,
    pub version: Version,
    pub owner: SlotOwner,
    pub compatible_with: &'static [Compatibility],
    pub signature: &'static str,
}

/// Everything that makes two registrations "the same implementation"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotFingerprint {
    pub descriptor: SlotDescriptor,
    pub signature: TypeId,
    pub entry: usize,
}

/// Runtime interface over implementations of any signature
pub trait ErasedSlot: Send + Sync + fmt::Debug + 'static {
    fn id(&self) -> &'static str;

    fn version(&self) -> Version;

    fn owner(&self) -> SlotOwner;

    fn compatible_with(&self) -> &'static [Compatibility];

    fn descriptor(&self) -> SlotDescriptor;

    fn fingerprint(&self) -> SlotFingerprint;

    fn as_any(&self) -> &dyn Any;

    /// Decode `input`, run, and encode the output
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::InvalidInput`] when `input` does not decode into
    /// the slot's input type (including inputs that fail validation), and
    /// [`SlotError::Output`] when the output cannot be encoded.
    fn run_json(&self, ctx: &mut SlotContext, input: Value) -> Result<Value, SlotError>;
}

/// Owned erased implementation, as stored by the registry
pub type BoxedSlot = Box<dyn ErasedSlot>;

impl<S: SlotSignature> ErasedSlot for SlotImplementation<S> {
    fn id(&self) -> &'static str {
        self.id
    }

    fn version(&self) -> Version {
        self.version
    }

    fn owner(&self) -> SlotOwner {
        S::owner()
    }

    fn compatible_with(&self) -> &'static [Compatibility] {
        self.compatible_with
    }

    fn descriptor(&self) -> SlotDescriptor {
        SlotDescriptor {
            id: self.id,
            version: self.version,
            owner: S::owner(),
            compatible_with: self.compatible_with,
            signature: std::any::type_name::<S>(),
        }
    }

    fn fingerprint(&self) -> SlotFingerprint {
        SlotFingerprint {
            descriptor: self.descriptor(),
            signature: TypeId::of::<S>(),
            entry: self.run as usize,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn run_json(&self, ctx: &mut SlotContext, input: Value) -> Result<Value, SlotError> {
        let input: S::Input =
            serde_json::from_value(input).map_err(|source| SlotError::InvalidInput {
                id: self.id.to_string(),
                source,
            })?;
        let output = (self.run)(ctx, &input);
        serde_json::to_value(output).map_err(|source| SlotError::Output {
            id: self.id.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::VersionRange;

    slot_signature! {
        Doubler: "test", "doubler" => u32 => u32
    }

    const COMPAT: &[Compatibility] = &[Compatibility::new("test", VersionRange::caret(1, 0, 0))];

    fn double(_ctx: &mut SlotContext, input: &u32) -> u32 {
        input * 2
    }

    static DOUBLE: SlotImplementation<Doubler> =
        SlotImplementation::new("double", Version::new(1, 0, 0), COMPAT, double);

    #[test]
    fn typed_run() {
        let mut ctx = SlotContext::default();
        assert_eq!(DOUBLE.run(&mut ctx, &21), 42);
        assert_eq!(DOUBLE.owner(), SlotOwner::new("test", "doubler"));
    }

    #[test]
    fn erased_run_json() {
        let boxed = DOUBLE.boxed();
        let mut ctx = SlotContext::default();
        let out = boxed.run_json(&mut ctx, serde_json::json!(5)).unwrap();
        assert_eq!(out, serde_json::json!(10));

        let err = boxed
            .run_json(&mut ctx, serde_json::json!("five"))
            .unwrap_err();
        assert!(matches!(err, SlotError::InvalidInput { .. }));
    }

    #[test]
    fn erased_downcasts_to_typed() {
        let boxed = DOUBLE.boxed();
        let typed = boxed
            .as_any()
            .downcast_ref::<SlotImplementation<Doubler>>()
            .unwrap();
        assert_eq!(typed.id(), "double");
    }

    #[test]
    fn copies_share_fingerprint() {
        let a = DOUBLE.boxed();
        let b = DOUBLE.boxed();
        assert_eq!(a.fingerprint(), b.fingerprint());

        let other: SlotImplementation<Doubler> =
            SlotImplementation::new("double", Version::new(1, 1, 0), COMPAT, double);
        assert_ne!(a.fingerprint(), other.boxed().fingerprint());
    }

    #[test]
    fn descriptor_serializes() {
        let json = serde_json::to_value(DOUBLE.boxed().descriptor()).unwrap();
        assert_eq!(json["id"], "double");
        assert_eq!(json["version"], "1.0.0");
        assert_eq!(json["owner"]["slot_name"], "doubler");
        assert_eq!(json["compatible_with"][0]["range"], "^1.0.0");
    }
}
