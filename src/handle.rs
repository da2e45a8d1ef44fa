//! Device handle lifecycle shared by the blocking and async drivers: capability linking, the
//! initialized gate, and variant / address resolution.

use crate::hw_def::{I2cAddr, Variant};
use crate::types::{Error, HandleState};
#[cfg(feature = "blocking")]
use crate::types::Sht4x;
#[cfg(feature = "async")]
use crate::types::Sht4xAsync;

impl HandleState {
    pub(crate) fn ensure_init<E>(&self) -> Result<(), Error<E>> {
        if self.initialized {
            Ok(())
        } else {
            warn!("sht4x: handle not initialized");
            Err(Error::NotInitialized)
        }
    }

    pub(crate) fn set_variant<E>(&mut self, variant: Variant) -> Result<(), Error<E>> {
        self.ensure_init()?;
        self.variant = variant;
        self.resolved_addr = variant.i2c_addr();
        Ok(())
    }

    pub(crate) fn set_address<E>(&mut self) -> Result<(), Error<E>> {
        self.ensure_init()?;
        self.i2c_addr = self.resolved_addr;
        Ok(())
    }

    pub(crate) fn variant<E>(&self) -> Result<Variant, Error<E>> {
        self.ensure_init()?;
        Ok(self.variant)
    }

    pub(crate) fn address<E>(&self) -> Result<I2cAddr, Error<E>> {
        self.ensure_init()?;
        Ok(self.i2c_addr)
    }
}

macro_rules! impl_handle_common {
    ($handle:ident, $transport:path) => {
        impl<T, D> Default for $handle<T, D> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T, D> $handle<T, D> {
            /// Create an empty handle: nothing linked, not initialized
            pub const fn new() -> Self {
                Self {
                    transport: None,
                    delay: None,
                    state: HandleState {
                        variant: Variant::Sht40Ad1b,
                        resolved_addr: I2cAddr::Addr44,
                        i2c_addr: I2cAddr::Addr44,
                        initialized: false,
                    },
                }
            }

            /// Create a handle with both capabilities linked; it still needs `init`
            pub fn with_capabilities(transport: T, delay: D) -> Self {
                let mut handle = Self::new();
                handle.link_transport(transport).link_delay(delay);
                handle
            }

            /// Link the bus transport
            pub fn link_transport(&mut self, transport: T) -> &mut Self {
                self.transport = Some(transport);
                self
            }

            /// Link the delay provider
            pub fn link_delay(&mut self, delay: D) -> &mut Self {
                self.delay = Some(delay);
                self
            }

            /// Whether `init` has succeeded and `deinit` has not been called since
            pub fn is_initialized(&self) -> bool {
                self.state.initialized
            }

            /// Destroy the handle, giving back whatever capabilities were linked
            pub fn destroy(self) -> (Option<T>, Option<D>) {
                (self.transport, self.delay)
            }
        }

        impl<T: $transport, D> $handle<T, D> {
            /// Select the sensor variant and resolve its bus address.
            ///
            /// The new address is used on the bus after [`Self::set_address`].
            pub fn set_variant(&mut self, variant: Variant) -> Result<(), Error<T::Error>> {
                self.state.set_variant(variant)
            }

            /// Use the address resolved from the current variant on the bus
            pub fn set_address(&mut self) -> Result<(), Error<T::Error>> {
                self.state.set_address()
            }

            /// Get the selected sensor variant
            pub fn variant(&self) -> Result<Variant, Error<T::Error>> {
                self.state.variant()
            }

            /// Get the bus address in use
            pub fn address(&self) -> Result<I2cAddr, Error<T::Error>> {
                self.state.address()
            }
        }
    };
}

#[cfg(feature = "blocking")]
impl_handle_common!(Sht4x, crate::Transport);
#[cfg(feature = "async")]
impl_handle_common!(Sht4xAsync, crate::AsyncTransport);
