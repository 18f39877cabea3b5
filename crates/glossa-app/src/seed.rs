// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{Collection, Record};

#[rustfmt::skip]
pub const BUILTIN_TERMS: [(&str, &str); 100] = [
    ("Abstract Syntax Tree", "Tree representation of source code structure produced by a parser."),
    ("Affine Type", "A type whose values may be used at most once."),
    ("Alignment", "The address multiple at which a value of a type must be stored."),
    ("Allocator", "Component that hands out and reclaims blocks of heap memory."),
    ("Arc", "Atomically reference-counted pointer for sharing ownership across threads."),
    ("Associated Type", "A type placeholder declared inside a trait and fixed by each implementation."),
    ("Async Runtime", "Executor and reactor that drive futures to completion."),
    ("Atomic", "An operation that completes indivisibly with respect to other threads."),
    ("Backpressure", "Signalling upstream producers to slow down when consumers fall behind."),
    ("Binary Heap", "Priority queue stored as a complete tree inside an array."),
    ("Blanket Implementation", "A trait impl that applies to every type meeting some bound."),
    ("Borrow Checker", "Compiler pass that enforces the aliasing and lifetime rules on references."),
    ("Box", "Owning pointer to a single heap allocation."),
    ("Buffer", "Region of memory that holds data in transit between producer and consumer."),
    ("Cache Line", "Smallest unit of memory transferred between main memory and CPU cache."),
    ("Cargo", "The Rust package manager and build orchestrator."),
    ("Cell", "Shareable mutable container that allows copying values in and out."),
    ("Channel", "Queue used to send values from one thread or task to another."),
    ("Closure", "Anonymous function that can capture variables from its environment."),
    ("Coherence", "Rule guaranteeing at most one trait implementation applies to a type."),
    ("Compile Time", "Work performed while the program is being built rather than run."),
    ("Condvar", "Condition variable used to block a thread until notified."),
    ("Const Generic", "A generic parameter that is a value rather than a type."),
    ("Copy", "Marker trait for types duplicated by a plain bitwise copy."),
    ("Crate", "The unit of compilation and distribution in Rust."),
    ("Deadlock", "State where threads wait on each other forever."),
    ("Deref Coercion", "Automatic conversion of a reference through the Deref trait."),
    ("Destructor", "Code that runs when a value goes out of scope."),
    ("Drop", "Trait whose method runs when an owned value is destroyed."),
    ("Dynamic Dispatch", "Selecting a method implementation at run time through a vtable."),
    ("Edition", "Opt-in language revision that lets syntax evolve without breaking crates."),
    ("Enum", "Type whose value is exactly one of several named variants."),
    ("Executor", "Scheduler that polls futures until they are ready."),
    ("Fat Pointer", "Pointer carrying extra metadata such as a length or vtable."),
    ("Feature Flag", "Cargo switch that enables optional code and dependencies."),
    ("FFI", "Foreign function interface for calling code written in other languages."),
    ("Future", "Value representing a computation that may not have finished yet."),
    ("Generic", "Code parameterised over types, specialised at compile time."),
    ("Guard", "Value that releases a resource such as a lock when dropped."),
    ("Hash Map", "Associative container keyed by hashed values."),
    ("Heap", "Memory region for allocations whose size or lifetime is dynamic."),
    ("Higher-Ranked Bound", "Trait bound quantified over all lifetimes with for<'a>."),
    ("Hygiene", "Property that macro-introduced names do not clash with caller names."),
    ("Immutable", "Cannot be modified after creation."),
    ("Inline", "Replacing a call with the body of the callee."),
    ("Interior Mutability", "Mutating data behind a shared reference through a safe wrapper."),
    ("Intrinsic", "Function implemented directly by the compiler."),
    ("Iterator", "Object that yields a sequence of values one at a time."),
    ("Lifetime", "Compile-time region during which a reference is valid."),
    ("Linker", "Tool that combines object files into an executable or library."),
    ("Lock-Free", "Algorithm guaranteeing system-wide progress without mutual exclusion."),
    ("Macro", "Code that writes code, expanded before type checking."),
    ("Marker Trait", "Trait with no methods used to tag types with a property."),
    ("Memory Leak", "Allocated memory that is never released."),
    ("Monomorphization", "Generating a specialised copy of generic code per concrete type."),
    ("Move Semantics", "Transferring ownership of a value instead of copying it."),
    ("Mutex", "Lock providing mutually exclusive access to shared data."),
    ("Newtype", "Single-field wrapper struct giving an existing type a distinct identity."),
    ("Niche", "Invalid bit pattern the compiler can reuse to store enum tags."),
    ("Object Safety", "Conditions a trait must satisfy to be used as a trait object."),
    ("Option", "Enum expressing a value that may be absent."),
    ("Orphan Rule", "Restriction that an impl must involve a local trait or type."),
    ("Ownership", "Rule that every value has a single owner responsible for dropping it."),
    ("Panic", "Unrecoverable error that unwinds or aborts the current thread."),
    ("Pattern Matching", "Destructuring values by shape and branching on the result."),
    ("Phantom Data", "Zero-sized marker recording a type relationship the fields do not."),
    ("Pin", "Wrapper guaranteeing a value will not move in memory."),
    ("Poisoning", "Marking a lock unusable after a thread panicked while holding it."),
    ("Prelude", "Set of names imported automatically into every module."),
    ("Procedural Macro", "Compiler plugin that transforms token streams."),
    ("Race Condition", "Bug where outcome depends on unsynchronised timing between threads."),
    ("Raw Pointer", "Unchecked pointer that may be null, dangling, or aliased."),
    ("Rc", "Single-threaded reference-counted pointer."),
    ("Reborrow", "Creating a shorter-lived reference from an existing one."),
    ("RefCell", "Cell that enforces borrow rules dynamically at run time."),
    ("Result", "Enum carrying either a success value or an error."),
    ("RwLock", "Lock allowing many readers or one writer at a time."),
    ("Send", "Marker trait for types safe to transfer to another thread."),
    ("Shadowing", "Declaring a new binding with the same name as an earlier one."),
    ("Slice", "Dynamically sized view into a contiguous sequence."),
    ("Smart Pointer", "Type that acts like a pointer and manages extra behaviour."),
    ("Stack", "Memory region for fixed-size locals that follows call order."),
    ("Static Dispatch", "Resolving a method call at compile time."),
    ("String Slice", "Borrowed view into UTF-8 encoded text."),
    ("Struct", "Type that groups named fields together."),
    ("Sync", "Marker trait for types safe to share between threads by reference."),
    ("Tagged Union", "Sum type storing a discriminant alongside the active variant."),
    ("Thread", "Independent sequence of execution within a process."),
    ("Thread Local", "Storage with a separate copy per thread."),
    ("Trait", "Collection of methods a type can implement to share behaviour."),
    ("Trait Object", "Value of type dyn Trait used for dynamic dispatch."),
    ("Turbofish", "The ::<> syntax for specifying generic arguments explicitly."),
    ("Type Inference", "Compiler deducing types that were not written out."),
    ("Undefined Behavior", "Operation whose result the language places no constraints on."),
    ("Unsafe", "Block or function where the programmer upholds invariants the compiler cannot check."),
    ("Unwinding", "Walking back up the stack running destructors after a panic."),
    ("Variance", "How subtyping of a parameter affects subtyping of a generic type."),
    ("Vec", "Growable contiguous array stored on the heap."),
    ("Workspace", "Set of crates that share one lockfile and output directory."),
    ("Zero-Cost Abstraction", "Abstraction that compiles to code as efficient as hand-written."),
];

pub fn builtin_collection() -> Collection {
    BUILTIN_TERMS
        .iter()
        .map(|(name, description)| Record::new(*name, *description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{BUILTIN_TERMS, builtin_collection};

    #[test]
    fn builtin_collection_preserves_seed_order() {
        let collection = builtin_collection();
        assert_eq!(collection.len(), BUILTIN_TERMS.len());
        for (record, (name, description)) in collection.iter().zip(BUILTIN_TERMS) {
            assert_eq!(record.name, name);
            assert_eq!(record.description, description);
        }
    }

    #[test]
    fn builtin_terms_are_non_empty() {
        for (name, description) in BUILTIN_TERMS {
            assert!(!name.trim().is_empty());
            assert!(!description.trim().is_empty(), "term {name}");
        }
    }
}
