#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared identifier utilities for gdwrap.
//!
//! Everything here operates on plain strings: conversion between the
//! engine's snake_case member names and the C#-facing PascalCase/camelCase
//! surface, plus reserved-identifier escaping for emitted parameter names.

pub mod utils;
